use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_format_rewrites_target() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1", "b": "2"}"#)?;
    test.write_lang("de_de", r#"{"b": "x", "__comment": "note", "c": "extra"}"#)?;

    assert_cmd_snapshot!(test.command().arg("de_de"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for de_de: 1 / 2 (50.0%)
    ✓ Formatted 1 locale file

    ----- stderr -----
    ");

    assert_eq!(
        test.read_lang("de_de")?,
        "{\n  \"__comment\": \"note\",\n  \"b\": \"x\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_format_skips_reference_and_keeps_order() -> Result<()> {
    let reference = r#"{"one": "One", "two": "Two", "three": "Three"}"#;
    let test = CliTest::with_reference(reference)?;
    test.write_lang("fr_fr", r#"{"three": "Trois", "one": "Un"}"#)?;
    test.write_lang("ja_jp", r#"{"two": "二", "one": "一", "three": "三"}"#)?;

    assert_cmd_snapshot!(test.command().args(["ja_jp", "en_us", "fr_fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for ja_jp: 3 / 3 (100.0%)
    Translation progress for fr_fr: 2 / 3 (66.7%)
    ✓ Formatted 2 locale files

    ----- stderr -----
    ");

    assert_eq!(test.read_lang("en_us")?, reference);
    assert_eq!(
        test.read_lang("ja_jp")?,
        "{\n  \"one\": \"一\",\n  \"two\": \"二\",\n  \"three\": \"三\"\n}\n"
    );
    assert_eq!(
        test.read_lang("fr_fr")?,
        "{\n  \"one\": \"Un\",\n  \"three\": \"Trois\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_format_is_idempotent() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1", "b": "2"}"#)?;
    test.write_lang(
        "de_de",
        r#"{"b": "ü", "__comment": ["keep", "me"], "a": "ä", "zzz": "gone"}"#,
    )?;

    test.command().arg("de_de").output()?;
    let first = test.read_lang("de_de")?;
    test.command().arg("de_de").output()?;

    assert_eq!(test.read_lang("de_de")?, first);
    Ok(())
}

#[test]
fn test_format_uses_locales_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langfmtrc.json",
        r#"{ "assetsRoot": "./assets", "locales": ["en_us", "de_de"] }"#,
    )?;
    test.write_lang("en_us", r#"{"a": "1"}"#)?;
    test.write_lang("de_de", r#"{"a": "A"}"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for de_de: 1 / 1 (100.0%)
    ✓ Formatted 1 locale file

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_format_with_assets_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("mod/lang/en_us.json", r#"{"a": "1", "b": "2"}"#)?;
    test.write_file("mod/lang/de_de.json", r#"{"b": "B", "a": "A"}"#)?;

    assert_cmd_snapshot!(test.command().args(["--assets-root", "mod", "de_de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for de_de: 2 / 2 (100.0%)
    ✓ Formatted 1 locale file

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("mod/lang/de_de.json")?,
        "{\n  \"a\": \"A\",\n  \"b\": \"B\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_format_verbose_lists_keys() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1", "b": "2"}"#)?;
    test.write_lang("de_de", r#"{"b": "x", "c": "extra"}"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["-v", "en_us", "de_de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for de_de: 1 / 2 (50.0%)

    de_de:
      - c  [dropped]
      - a  [missing]
    note: reference locale skipped 1 time(s)
    ✓ Formatted 1 locale file

    ----- stderr -----
    Note: Using configuration from [PROJECT]/.langfmtrc.json
    ");
    Ok(())
}

#[test]
fn test_format_missing_locale_file_fails() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1"}"#)?;
    test.write_lang("fr_fr", r#"{"x": "1", "a": "2"}"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["de_de", "fr_fr"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to access language file [PROJECT]/assets/lang/de_de.json: No such file or directory (os error 2)
    ");

    // Processing stopped before fr_fr.
    assert_eq!(test.read_lang("fr_fr")?, r#"{"x": "1", "a": "2"}"#);
    Ok(())
}

#[test]
fn test_format_invalid_json_fails() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1"}"#)?;
    test.write_lang("de_de", r#"{"a": "1",,}"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("de_de"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse language file [PROJECT]/assets/lang/de_de.json: [ERROR]
    ");
    Ok(())
}

#[test]
fn test_format_empty_reference_fails() -> Result<()> {
    let test = CliTest::with_reference("{}")?;
    test.write_lang("de_de", r#"{"a": "1"}"#)?;

    assert_cmd_snapshot!(test.command().arg("de_de"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Reference locale 'en_us' has no entries
    ");

    assert_eq!(test.read_lang("de_de")?, r#"{"a": "1"}"#);
    Ok(())
}

#[test]
fn test_format_without_locales_fails() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1"}"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No locales given.
    Hint: Pass locales as arguments (e.g. `langfmt de_de`) or set 'locales' in .langfmtrc.json.
    ");
    Ok(())
}

#[test]
fn test_format_locale_named_init_after_separator() -> Result<()> {
    let test = CliTest::with_reference(r#"{"a": "1"}"#)?;
    test.write_lang("init", r#"{"a": "A", "b": "B"}"#)?;

    assert_cmd_snapshot!(test.command().args(["--", "init"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation progress for init: 1 / 1 (100.0%)
    ✓ Formatted 1 locale file

    ----- stderr -----
    ");

    assert_eq!(test.read_lang("init")?, "{\n  \"a\": \"A\"\n}\n");
    assert_eq!(
        test.read_file(".langfmtrc.json")?,
        r#"{ "assetsRoot": "./assets" }"#
    );
    Ok(())
}
