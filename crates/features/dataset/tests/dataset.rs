use geodex_dataset::continent;
use geodex_dataset::dataset;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn covers_every_iso_assignment() {
    assert_eq!(dataset().len(), 249);
}

#[test]
fn codes_are_sorted_and_unique() {
    let codes: Vec<_> = dataset().iter().map(|c| c.code).collect();
    assert!(codes.windows(2).all(|w| w[0] < w[1]), "codes must be strictly ascending");
}

#[test]
fn alpha3_codes_are_unique() {
    let mut seen = HashSet::new();
    for c in dataset() {
        assert!(seen.insert(c.alpha3), "duplicate alpha3 {}", c.alpha3);
    }
}

#[test]
fn codes_have_iso_shape() {
    for c in dataset() {
        assert_eq!(c.code.len(), 2, "{}", c.code);
        assert!(c.code.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.code);
        assert_eq!(c.alpha3.len(), 3, "{}", c.alpha3);
        assert!(c.alpha3.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.alpha3);
    }
}

#[test]
fn every_record_has_a_known_continent_and_timezone() {
    for c in dataset() {
        assert!(continent::ALL.contains(&c.continent), "{}: {}", c.code, c.continent);
        assert!(!c.timezones.is_empty(), "{} has no timezone", c.code);
        assert!(!c.label.is_empty());
        assert!(!c.currency.code.is_empty());
    }
}

#[test]
fn north_american_plan_shares_country_code_one() {
    let ones: Vec<_> = dataset().iter().filter(|c| c.phone == "1").map(|c| c.code).collect();
    assert_eq!(ones, ["CA", "UM", "US"]);
    assert_eq!(dataset().get("BS").map(|c| c.phone), Some("1-242"));
}

#[test]
fn sample_records() {
    let gb = dataset().get("gb").expect("GB present");
    assert_eq!(gb.alpha3, "GBR");
    assert_eq!(gb.phone, "44");
    assert_eq!(gb.capital, "London");
    assert_eq!(gb.continent, continent::EUROPE);
    assert_eq!(gb.currency.code, "GBP");
}

proptest! {
    #[test]
    fn lookup_ignores_case(idx in 0usize..249, mask in proptest::collection::vec(any::<bool>(), 2)) {
        let country = &dataset().as_slice()[idx];
        let mixed: String = country
            .code
            .chars()
            .zip(mask)
            .map(|(ch, lower)| if lower { ch.to_ascii_lowercase() } else { ch })
            .collect();
        prop_assert_eq!(dataset().get(&mixed), Some(country));
    }
}
