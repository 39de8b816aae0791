use indoc::indoc;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn test_case(name: &str, time: f64, failed: bool) -> TestCase {
    TestCase {
        name: String::from(name),
        time,
        failed,
    }
}

#[test]
fn test_single_passing_case() -> Result<()> {
    let report = TestReport::parse(
        br#"<testsuite name="suiteA"><testcase name="t1" time="1.5"/></testsuite>"#,
    )?;

    assert_eq!(Some(String::from("suiteA")), report.name);
    assert_eq!(vec![test_case("t1", 1.5, false)], report.test_cases);
    assert_eq!(TestStatus::Success, report.test_cases[0].status());
    Ok(())
}

#[test]
fn test_collects_nested_cases_in_document_order() -> Result<()> {
    let report = indoc! {r#"
        <testsuites name="all">
            <testsuite name="first">
                <testcase name="a" time="0.25"/>
                <testcase name="b" time="3">
                    <failure message="expected 1 got 2"/>
                </testcase>
            </testsuite>
            <testsuite name="second">
                <testcase name="c">
                    <system-out>noise</system-out>
                </testcase>
            </testsuite>
        </testsuites>
    "#};

    let report = TestReport::parse(report.as_bytes())?;

    assert_eq!(Some(String::from("all")), report.name);
    assert_eq!(
        vec![
            test_case("a", 0.25, false),
            test_case("b", 3.0, true),
            test_case("c", 0.0, false),
        ],
        report.test_cases
    );
    Ok(())
}

#[test]
fn test_failure_must_be_a_direct_child() -> Result<()> {
    let report = indoc! {r#"
        <testsuite name="suite">
            <testcase name="wrapped">
                <properties><failure/></properties>
            </testcase>
            <testcase name="direct"><failure>trace</failure></testcase>
        </testsuite>
    "#};

    let report = TestReport::parse(report.as_bytes())?;

    assert_eq!(
        vec![TestStatus::Success, TestStatus::Fail],
        report
            .test_cases
            .iter()
            .map(TestCase::status)
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_failure_after_nested_case_belongs_to_outer_case() -> Result<()> {
    let report = indoc! {r#"
        <testsuite name="suite">
            <testcase name="outer">
                <testcase name="inner"/>
                <testcase name="inner-open"></testcase>
                <failure/>
            </testcase>
        </testsuite>
    "#};

    let report = TestReport::parse(report.as_bytes())?;

    assert_eq!(
        vec![
            test_case("outer", 0.0, true),
            test_case("inner", 0.0, false),
            test_case("inner-open", 0.0, false),
        ],
        report.test_cases
    );
    Ok(())
}

#[test]
fn test_root_can_itself_be_a_test_case() -> Result<()> {
    let report = TestReport::parse(br#"<testcase name="solo" time="2"><failure/></testcase>"#)?;

    assert_eq!(Some(String::from("solo")), report.name);
    assert_eq!(vec![test_case("solo", 2.0, true)], report.test_cases);
    Ok(())
}

#[test]
fn test_root_without_name_or_cases() -> Result<()> {
    let report = TestReport::parse(b"<testsuite tests=\"0\"/>")?;

    assert_eq!(TestReport::default(), report);
    Ok(())
}

#[rstest]
#[case("1.5", 1.5)]
#[case(" 2 ", 2.0)]
#[case("0.001", 0.001)]
#[case("1e3", 1000.0)]
#[case("-0.5", -0.5)]
fn test_time_values(#[case] time: &str, #[case] expected: f64) -> Result<()> {
    let content = format!(
        r#"<testsuite name="suite"><testcase name="t" time="{}"/></testsuite>"#,
        time
    );
    let report = TestReport::parse(content.as_bytes())?;

    assert_eq!(expected, report.test_cases[0].time);
    Ok(())
}

#[test]
fn test_non_numeric_time_is_an_error() {
    let result =
        TestReport::parse(br#"<testsuite name="suite"><testcase name="t" time="slow"/></testsuite>"#);

    match result {
        Err(Error::InvalidTime { name, value }) => {
            assert_eq!("t", name);
            assert_eq!("slow", value);
        }
        other => panic!("expected invalid time, got {:?}", other),
    }
}

#[test]
fn test_case_without_name_is_an_error() {
    let result = TestReport::parse(br#"<testsuite name="suite"><testcase time="1"/></testsuite>"#);

    assert!(matches!(
        result,
        Err(Error::MissingAttribute {
            attribute: "name",
            ..
        })
    ));
}

#[test]
fn test_malformed_report_is_an_error() {
    let result = TestReport::parse(br#"<testsuite name="suite"><testcase name="t">"#);

    assert!(result.is_err());
}

#[test]
fn test_malformed_failure_is_an_error() {
    let result = TestReport::parse(
        br#"<testsuite name="suite"><testcase name="t"><failure message=oops>a & b</failure></testcase></testsuite>"#,
    );

    assert!(matches!(result, Err(Error::XmlError(_))));
}

#[test]
fn test_status_tokens() {
    assert_eq!("SUCCESS", TestStatus::Success.to_string());
    assert_eq!("FAIL", TestStatus::Fail.to_string());
}
