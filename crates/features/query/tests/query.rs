use geodex_kernel::collation;
use geodex_query::*;
use proptest::prelude::*;
use std::cmp::Ordering;

fn labels(countries: &[&Country]) -> Vec<&'static str> {
    countries.iter().map(|c| c.label).collect()
}

#[test]
fn every_code_round_trips_through_lookup() {
    for c in get_all_countries(&FilterSortOptions::default()) {
        assert_eq!(get_country_by_code(c.code), Some(c));
        assert_eq!(get_country_by_code(&c.code.to_lowercase()), Some(c));
        assert_eq!(get_country_by_alpha3(c.alpha3), Some(c));
        assert_eq!(get_country_by_alpha3(&c.alpha3.to_lowercase()), Some(c));
    }
}

#[test]
fn phone_lookup_is_exact() {
    let codes: Vec<_> = get_country_by_phone("1").iter().map(|c| c.code).collect();
    assert_eq!(codes, ["CA", "UM", "US"]);

    let codes: Vec<_> = get_country_by_phone("44").iter().map(|c| c.code).collect();
    assert_eq!(codes, ["GB", "GG", "IM", "JE"]);

    let codes: Vec<_> = get_country_by_phone("1-242").iter().map(|c| c.code).collect();
    assert_eq!(codes, ["BS"]);
}

#[test]
fn europe_filter_keeps_dataset_order() {
    let europe = get_all_countries(&FilterSortOptions::new().filter(|c| c.continent == "Europe"));
    assert!(!europe.is_empty());
    assert!(europe.iter().all(|c| c.continent == "Europe"));
    assert!(europe.windows(2).all(|w| w[0].code < w[1].code));
    assert!(europe.iter().any(|c| c.code == "FR"));
}

#[test]
fn label_sort_is_non_decreasing_and_desc_reverses_it() {
    let asc = get_all_countries(&FilterSortOptions::new().sort(SortBy::Label, SortOrder::Asc));
    let desc = get_all_countries(&FilterSortOptions::new().sort(SortBy::Label, SortOrder::Desc));

    assert!(asc.windows(2).all(|w| {
        collation::compare(Collation::Natural, w[0].label, w[1].label) != Ordering::Greater
    }));

    let mut reversed = labels(&asc);
    reversed.reverse();
    assert_eq!(labels(&desc), reversed);
}

#[test]
fn natural_collation_places_accented_labels_by_base_letter() {
    let asc = labels(&get_all_countries(&FilterSortOptions::new().sort(SortBy::Label, SortOrder::Asc)));
    let pos = |label: &str| asc.iter().position(|l| *l == label).expect("label present");

    assert!(pos("Åland Islands") < pos("Albania"));
    assert!(pos("Cuba") < pos("Curaçao") && pos("Curaçao") < pos("Cyprus"));
}

#[test]
fn ordinal_collation_sorts_by_code_point() {
    let asc = labels(&get_all_countries(
        &FilterSortOptions::new().sort(SortBy::Label, SortOrder::Asc).collation(Collation::Ordinal),
    ));
    assert_eq!(asc.last(), Some(&"Åland Islands"));
}

#[test]
fn continent_sort_is_stable() {
    let sorted =
        get_all_countries(&FilterSortOptions::new().sort(SortBy::Continent, SortOrder::Asc));
    for w in sorted.windows(2) {
        if w[0].continent == w[1].continent {
            assert!(w[0].code < w[1].code, "{} before {}", w[0].code, w[1].code);
        }
    }
}

#[test]
fn descending_sort_keeps_ties_in_dataset_order() {
    let desc =
        get_all_countries(&FilterSortOptions::new().sort(SortBy::Continent, SortOrder::Desc));
    assert_eq!(desc.first().map(|c| c.continent), Some("South America"));
    assert_eq!(desc.first().map(|c| c.code), Some("AR"));
    for w in desc.windows(2) {
        if w[0].continent == w[1].continent {
            assert!(w[0].code < w[1].code, "{} before {}", w[0].code, w[1].code);
        }
    }
}

#[test]
fn with_flags_matches_plain_query() {
    let options = FilterSortOptions::new()
        .filter(|c| c.continent == "Oceania")
        .sort(SortBy::Code, SortOrder::Desc);
    let plain = get_all_countries(&options);
    let flagged = get_all_countries_with_flags(&options);

    assert_eq!(plain.len(), flagged.len());
    for (p, f) in plain.iter().zip(&flagged) {
        assert_eq!(**p, f.country);
        assert!(f.flag_svg.ends_with(&format!("/{}.svg", p.code.to_lowercase())));
    }
}

fn sort_by() -> impl Strategy<Value = SortBy> {
    prop_oneof![
        Just(SortBy::Label),
        Just(SortBy::Code),
        Just(SortBy::Phone),
        Just(SortBy::Continent),
    ]
}

fn collation_strategy() -> impl Strategy<Value = Collation> {
    prop_oneof![Just(Collation::Natural), Just(Collation::Ordinal)]
}

proptest! {
    #[test]
    fn desc_is_reverse_of_asc(by in sort_by(), collation in collation_strategy()) {
        let asc = get_all_countries(
            &FilterSortOptions::new().sort(by, SortOrder::Asc).collation(collation),
        );
        let desc = get_all_countries(
            &FilterSortOptions::new().sort(by, SortOrder::Desc).collation(collation),
        );
        for (a, d) in asc.iter().zip(desc.iter().rev()) {
            prop_assert_eq!(a.field(by), d.field(by));
        }
    }

    #[test]
    fn filter_returns_a_subsequence(first in "[A-Z]") {
        let prefix = first.clone();
        let kept = get_all_countries(
            &FilterSortOptions::new().filter(move |c| c.code.starts_with(prefix.as_str())),
        );
        let expected: Vec<_> = get_all_countries(&FilterSortOptions::default())
            .into_iter()
            .filter(|c| c.code.starts_with(first.as_str()))
            .collect();
        prop_assert_eq!(kept, expected);
    }
}
