use anyhow::Result;
use insta::{assert_snapshot, with_settings};
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_config_data_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_data_files("resources")?;
    test.write_file(".ctransrc.json", r#"{"dataDir": "resources"}"#)?;

    let run = test.run(&["translate", "can", "fr"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Canada\n");

    Ok(())
}

#[test]
fn test_config_file_names() -> Result<()> {
    let test = CliTest::with_data()?;
    test.write_file("data/countries.json", r#"[{"alpha3": "fra", "en": "France"}]"#)?;
    test.write_file(
        ".ctransrc.json",
        r#"{"translationsFile": "countries.json"}"#,
    )?;

    let run = test.run(&["translate", "can", "en"])?;
    assert_eq!(run.code, Some(1));

    let run = test.run(&["translate", "fra", "en"])?;
    assert_eq!(run.stdout, "France\n");

    Ok(())
}

#[test]
fn test_data_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_data_files("elsewhere")?;
    test.write_file(".ctransrc.json", r#"{"dataDir": "missing"}"#)?;

    let run = test.run(&["--data-dir", "elsewhere", "translate", "fra", "de"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Frankreich\n");

    Ok(())
}

#[test]
fn test_data_dir_env_var() -> Result<()> {
    let test = CliTest::new()?;
    test.write_data_files("elsewhere")?;

    let output = test
        .command()
        .env("CTRANS_DATA_DIR", test.root().join("elsewhere"))
        .args(["translate", "can", "ja"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "カナダ\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_data()?;
    test.write_file(".ctransrc.json", r#"{"dataDir": ""}"#)?;

    let run = test.run(&["countries"])?;
    assert_eq!(run.code, Some(2));
    assert_eq!(run.stderr, "Error: 'dataDir' must not be empty\n");

    Ok(())
}

#[test]
fn test_verbose_reports_loaded_data() -> Result<()> {
    let test = CliTest::with_data()?;
    test.write_file(
        "data/language-codes.txt",
        "Name\tCode\nEnglish\ten\nnot a row\nFrench\tfr\n",
    )?;

    let run = test.run(&["-v", "translate", "can", "en"])?;
    assert_eq!(run.stdout, "Canada\n");
    with_settings!({filters => vec![(r"/\S*/data/", "[DATA]/")]}, {
        assert_snapshot!(run.stderr.trim_end(), @r"
        Note: No .ctransrc.json found, using default configuration
        Loaded 2 countries from [DATA]/sample.json
        Loaded 2 languages from [DATA]/language-codes.txt
        warning: skipped 1 malformed row(s) in [DATA]/language-codes.txt
        Loaded 2 countries from [DATA]/country-codes.txt
        ");
    });

    Ok(())
}
