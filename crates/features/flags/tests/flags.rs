use geodex_dataset::dataset;
use geodex_domain::config::FlagsConfig;
use geodex_flags::*;
use proptest::prelude::*;

#[test]
fn with_flags_keeps_every_country_field() {
    let jp = dataset().get("JP").expect("JP present");
    let before = *jp;
    let derived = with_flags(jp);

    assert_eq!(derived.country, before);
    assert_eq!(*jp, before);
    assert_eq!(derived.flag_emoji, "\u{1F1EF}\u{1F1F5}");
    assert_eq!(derived.flag_png20, "https://flagcdn.com/w20/jp.png");
    assert_eq!(derived.flag_png40, "https://flagcdn.com/w40/jp.png");
    assert_eq!(derived.flag_svg, "https://flagcdn.com/jp.svg");
    assert_eq!(derived.src_set, "https://flagcdn.com/w40/jp.png 2x");
}

#[test]
fn every_dataset_code_has_a_two_symbol_flag() {
    for c in dataset() {
        let emoji = to_flag_emoji(c.code);
        assert_eq!(emoji.chars().count(), 2, "{}", c.code);
        assert!(emoji.chars().all(|ch| ('\u{1F1E6}'..='\u{1F1FF}').contains(&ch)));
    }
}

#[test]
fn deriver_from_config() {
    let config = FlagsConfig { cdn_base_url: "http://localhost:8080/".to_owned() };
    let deriver = FlagDeriver::from(&config);
    let gb = dataset().get("GB").expect("GB present");
    assert_eq!(deriver.with_flags(gb).flag_png20, "http://localhost:8080/w20/gb.png");
}

proptest! {
    #[test]
    fn emoji_ignores_case(code in "[a-zA-Z]{2}") {
        prop_assert_eq!(to_flag_emoji(&code), to_flag_emoji(&code.to_uppercase()));
    }

    #[test]
    fn urls_ignore_case(code in "[a-zA-Z]{2}") {
        prop_assert_eq!(to_flag_urls(&code), to_flag_urls(&code.to_lowercase()));
    }

    #[test]
    fn emoji_never_panics(code in "\\PC{0,4}") {
        let _ = to_flag_emoji(&code);
    }
}
