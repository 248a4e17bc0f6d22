use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_translate_by_codes() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["translate", "can", "de"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Kanada\n");
    assert_eq!(run.stderr, "");

    Ok(())
}

#[test]
fn test_translate_by_names() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["translate", "France", "German"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Frankreich\n");

    Ok(())
}

#[test]
fn test_translate_ignores_code_case() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["translate", "CAN", "JA"])?;
    assert_eq!(run.stdout, "カナダ\n");

    Ok(())
}

#[test]
fn test_translate_unknown_country() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["translate", "xyz", "en"])?;
    assert_eq!(run.code, Some(1));
    assert_eq!(run.stdout, "");
    assert_eq!(run.stderr, "\u{2718} Unknown country \"xyz\"\n");

    Ok(())
}

#[test]
fn test_translate_missing_language() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["translate", "fra", "ja"])?;
    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.stderr,
        "\u{2718} No translation of \"France\" into \"ja\"\n"
    );

    Ok(())
}

#[test]
fn test_translate_with_builtin_translator() -> Result<()> {
    let test = CliTest::with_data()?;
    test.remove_file("data/sample.json")?;

    let run = test.run(&["--builtin", "translate", "Canada", "es"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Canadá\n");

    Ok(())
}

#[test]
fn test_countries() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["countries"])?;
    assert_eq!(run.code, Some(0));
    assert_snapshot!(run.stdout.trim_end(), @r"
    Code  Country
    can   Canada
    fra   France
    ");

    Ok(())
}

#[test]
fn test_languages_sorted_by_name() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["languages", "Canada"])?;
    assert_eq!(run.code, Some(0));
    assert_snapshot!(run.stdout.trim_end(), @r"
    Code  Language
    en    English
    fr    French
    de    German
    ja    Japanese
    ");

    Ok(())
}

#[test]
fn test_languages_unknown_country() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run(&["languages", "Atlantis"])?;
    assert_eq!(run.code, Some(1));
    assert_eq!(run.stderr, "\u{2718} Unknown country \"Atlantis\"\n");

    Ok(())
}

#[test]
fn test_language_lookups() -> Result<()> {
    let test = CliTest::with_data()?;

    assert_eq!(test.run(&["language", "ja"])?.stdout, "Japanese\n");
    assert_eq!(test.run(&["language", "German"])?.stdout, "de\n");

    let miss = test.run(&["language", "Klingon"])?;
    assert_eq!(miss.code, Some(1));
    assert_eq!(
        miss.stderr,
        "\u{2718} Unknown language or code \"Klingon\"\n"
    );

    Ok(())
}

#[test]
fn test_missing_translations_file_is_fatal() -> Result<()> {
    let test = CliTest::with_data()?;
    test.remove_file("data/sample.json")?;

    let run = test.run(&["countries"])?;
    assert_eq!(run.code, Some(2));
    assert_eq!(run.stdout, "");
    assert!(
        run.stderr
            .starts_with("Error: Failed to read translations file")
    );

    Ok(())
}

#[test]
fn test_invalid_translations_file_is_fatal() -> Result<()> {
    let test = CliTest::with_data()?;
    test.write_file("data/sample.json", r#"[{"en": "Canada"}]"#)?;

    let run = test.run(&["translate", "can", "en"])?;
    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("Failed to load translations file"));
    assert!(run.stderr.contains("Missing field \"alpha3\""));

    Ok(())
}

#[test]
fn test_missing_language_codes_file_is_fatal() -> Result<()> {
    let test = CliTest::with_data()?;
    test.remove_file("data/language-codes.txt")?;

    let run = test.run(&["translate", "can", "en"])?;
    assert_eq!(run.code, Some(2));
    assert!(
        run.stderr
            .starts_with("Error: Failed to read language codes file")
    );

    Ok(())
}

#[test]
fn test_malformed_language_rows_are_tolerated() -> Result<()> {
    let test = CliTest::with_data()?;
    test.write_file(
        "data/language-codes.txt",
        "Name\tCode\nEnglish\ten\nbroken line\nFrench\tfr\textra\n",
    )?;

    let run = test.run(&["language", "en"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "English\n");

    Ok(())
}
