use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_interactive_session() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run_with_input(&[], "Canada\nJapanese\nquit\n")?;
    assert_eq!(run.code, Some(0));
    assert_eq!(
        run.stdout,
        "Canada\n\
         France\n\
         select a country from above:\n\
         English\n\
         French\n\
         German\n\
         Japanese\n\
         select a language from above:\n\
         Canada in Japanese is カナダ\n\
         Press enter to continue or quit to exit.\n"
    );

    Ok(())
}

#[test]
fn test_interactive_session_ends_with_input() -> Result<()> {
    let test = CliTest::with_data()?;

    let run = test.run_with_input(&[], "fra\nfr\n")?;
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("France in French is France\n"));
    assert!(
        run.stdout
            .ends_with("Press enter to continue or quit to exit.\n")
    );

    Ok(())
}
