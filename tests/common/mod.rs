// Shared test helpers for integration tests
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a plan document into `dir` and returns its path.
pub fn write_plan(dir: &Path, content: &str) -> PathBuf {
    let plan_path = dir.join("TestPlan.xml");
    fs::write(&plan_path, content).expect("Failed to write test plan");
    plan_path
}

/// A minimal single-test plan: `echo hello` compared against `answer`.
pub fn echo_plan(answer: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<REGRESSION>
  <TEST order="1">
    <CALL>echo hello</CALL>
    <OUTPUT name="out.txt"/>
    <ANSWER>
      {answer}
    </ANSWER>
  </TEST>
</REGRESSION>
"#
    )
}

/// A plan whose single test writes to its error stream but exits 0.
pub fn stderr_plan() -> &'static str {
    r#"<?xml version="1.0"?>
<REGRESSION>
  <TEST order="1">
    <CALL>sh -c 'echo oops 1>&amp;2'</CALL>
    <OUTPUT name="out.txt"/>
    <ANSWER></ANSWER>
  </TEST>
</REGRESSION>
"#
}
