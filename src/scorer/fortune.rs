use super::types::{Element, ElementSet, Fortune, ScoreSet};

/// Traditional three-powers compatibility chart, flattened.
///
/// Index is `5 * (celestial + 5 * personal) + earthly` over element
/// indices, so each row of 25 below is one personal element and each run
/// of five within it one celestial element. 0 = inauspicious, 1 = fair,
/// 2 = great.
#[rustfmt::skip]
const SANSAI_TABLE: [u8; 125] = [
    2, 2, 2, 0, 0, 2, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1,
    2, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 0, 0, 0, 2, 1, 2, 0, 0, 0, 2, 2, 2, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0,
    2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
];

pub fn table_index(celestial: Element, personal: Element, earthly: Element) -> usize {
    5 * (celestial.index() + 5 * personal.index()) + earthly.index()
}

pub fn fortune(celestial: Element, personal: Element, earthly: Element) -> Fortune {
    match SANSAI_TABLE[table_index(celestial, personal, earthly)] {
        2 => Fortune::Great,
        1 => Fortune::Fair,
        _ => Fortune::Inauspicious,
    }
}

pub fn classify(scores: &ScoreSet) -> ElementSet {
    let celestial = Element::from_score(scores.celestial);
    let personal = Element::from_score(scores.personal);
    let earthly = Element::from_score(scores.earthly);
    ElementSet {
        celestial,
        personal,
        earthly,
        fortune: fortune(celestial, personal, earthly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_index_spans_full_range() {
        assert_eq!(table_index(Element::Wood, Element::Wood, Element::Wood), 0);
        assert_eq!(table_index(Element::Water, Element::Water, Element::Water), 124);
        assert_eq!(table_index(Element::Water, Element::Earth, Element::Water), 74);
    }

    #[test]
    fn test_fortune_tier_distribution() {
        let count = |v: u8| SANSAI_TABLE.iter().filter(|&&x| x == v).count();
        assert_eq!(count(2), 27);
        assert_eq!(count(1), 12);
        assert_eq!(count(0), 86);
    }

    #[test]
    fn test_all_wood_is_great() {
        assert_eq!(fortune(Element::Wood, Element::Wood, Element::Wood), Fortune::Great);
    }
}
