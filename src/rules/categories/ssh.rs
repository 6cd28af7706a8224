//! SSH daemon rules
//!
//! Audits `sshd_config` against a fixed checklist:
//! - Listening port and protocol version
//! - Root login, empty passwords and rhosts authentication
//! - Login grace time, keep-alive and session limits
//! - X11 and TCP forwarding
//!
//! Every check yields exactly one finding per file. The checklist is a table
//! interpreted by [`evaluate`]; the order of the table is the order messages
//! appear in each severity bucket.

use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{HostLensError, RuleError};
use crate::rules::engine::{Rule, RuleInfo, RuleType};
use crate::rules::results::{CheckResults, Finding, Severity};
use crate::scanner::{self, conf, Directives};

/// Default location of the SSH daemon configuration
pub const DEFAULT_SSHD_CONFIG: &str = "/etc/ssh/sshd_config";

/// Condition under which a present value is judged insecure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailsWhen {
    IntEq(i64),
    IntNe(i64),
    IntGt(i64),
    IntGe(i64),
    StrEq(&'static str),
}

impl FailsWhen {
    fn matches(self, directive: &str, value: &str) -> Result<bool, RuleError> {
        Ok(match self {
            FailsWhen::IntEq(n) => parse_int(directive, value)? == n,
            FailsWhen::IntNe(n) => parse_int(directive, value)? != n,
            FailsWhen::IntGt(n) => parse_int(directive, value)? > n,
            FailsWhen::IntGe(n) => parse_int(directive, value)? >= n,
            FailsWhen::StrEq(s) => value == s,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    severity: Severity,
    message: &'static str,
}

const fn ok(message: &'static str) -> Outcome {
    Outcome {
        severity: Severity::Ok,
        message,
    }
}

const fn low(message: &'static str) -> Outcome {
    Outcome {
        severity: Severity::Low,
        message,
    }
}

const fn medium(message: &'static str) -> Outcome {
    Outcome {
        severity: Severity::Medium,
        message,
    }
}

const fn high(message: &'static str) -> Outcome {
    Outcome {
        severity: Severity::High,
        message,
    }
}

/// One checklist entry
#[derive(Debug, Clone, Copy)]
struct Check {
    id: &'static str,
    /// Directive whose presence opens the check
    directive: &'static str,
    /// Directive whose value is compared
    compared: &'static str,
    /// Only evaluate when `Protocol` is 2, otherwise report `absent`
    requires_protocol_2: bool,
    fails_when: FailsWhen,
    pass: Outcome,
    fail: Outcome,
    absent: Outcome,
}

const CHECKLIST: [Check; 12] = [
    Check {
        id: "SSH001",
        directive: "Port",
        compared: "Port",
        requires_protocol_2: false,
        fails_when: FailsWhen::IntEq(22),
        pass: ok("SSH is not using the default port"),
        fail: low("SSH is using the default port"),
        absent: low("SSH is using the default port"),
    },
    Check {
        id: "SSH002",
        directive: "Protocol",
        compared: "Protocol",
        requires_protocol_2: false,
        fails_when: FailsWhen::IntNe(2),
        pass: ok("SSH is using protocol v2"),
        fail: high("SSH is not using protocol v2"),
        absent: high("SSH is not using protocol v2"),
    },
    Check {
        id: "SSH003",
        directive: "PermitRootLogin",
        compared: "PermitRootLogin",
        requires_protocol_2: false,
        fails_when: FailsWhen::StrEq("yes"),
        pass: ok("Root access is not allowed"),
        fail: medium("Root access allowed"),
        absent: medium("Root access is allowed"),
    },
    Check {
        id: "SSH004",
        directive: "LoginGraceTime",
        compared: "LoginGraceTime",
        requires_protocol_2: false,
        fails_when: FailsWhen::IntGt(30),
        pass: ok("Disconnects no successfully login after 30 seconds"),
        fail: low("Keeping connection login attempt to more than 30 seconds"),
        absent: low("Keeping connection login attempt to more than 30 seconds"),
    },
    Check {
        id: "SSH005",
        directive: "ClientAliveInterval",
        compared: "ClientAliveInterval",
        requires_protocol_2: true,
        fails_when: FailsWhen::IntGt(120),
        pass: ok("Disconnects session after more than 120 seconds of inactivity"),
        fail: low("Keeping inactive session"),
        absent: low("Keeping inactive session"),
    },
    // Compares ClientAliveInterval, not the count itself.
    Check {
        id: "SSH006",
        directive: "ClientAliveCountMax",
        compared: "ClientAliveInterval",
        requires_protocol_2: true,
        fails_when: FailsWhen::IntGe(4),
        pass: ok("Great value checkalive message"),
        fail: low("High total number of checkalive message"),
        absent: low("High total number of checkalive message"),
    },
    Check {
        id: "SSH007",
        directive: "MaxAuthTries",
        compared: "MaxAuthTries",
        requires_protocol_2: false,
        fails_when: FailsWhen::IntGe(5),
        pass: ok("Good value for login attempts"),
        fail: low("High value for login attempts"),
        absent: low("High value for login attempts"),
    },
    Check {
        id: "SSH008",
        directive: "MaxSessions",
        compared: "MaxSessions",
        requires_protocol_2: false,
        fails_when: FailsWhen::IntGt(5),
        pass: ok("Good value of open sessions allowed"),
        fail: low("High number of open sessions allowed"),
        absent: low("High number of open sessions allowed"),
    },
    Check {
        id: "SSH009",
        directive: "PermitEmptyPasswords",
        compared: "PermitEmptyPasswords",
        requires_protocol_2: false,
        fails_when: FailsWhen::StrEq("yes"),
        pass: ok("Empty passwords are not allowed"),
        fail: high("Empty passwords are allowed"),
        absent: high("Empty passwords are allowed"),
    },
    Check {
        id: "SSH010",
        directive: "IgnoreRhosts",
        compared: "IgnoreRhosts",
        requires_protocol_2: false,
        fails_when: FailsWhen::StrEq("no"),
        pass: ok("Not using rhosts file"),
        fail: high("Using rhosts file"),
        absent: high("Using rhosts file"),
    },
    Check {
        id: "SSH011",
        directive: "X11Forwarding",
        compared: "X11Forwarding",
        requires_protocol_2: false,
        fails_when: FailsWhen::StrEq("yes"),
        pass: ok("X11 forward is not allowed"),
        fail: low("X11 forward is allowed"),
        absent: ok("X11 forward is not allowed"),
    },
    Check {
        id: "SSH012",
        directive: "AllowTcpForwarding",
        compared: "AllowTcpForwarding",
        requires_protocol_2: false,
        fails_when: FailsWhen::StrEq("yes"),
        pass: ok("TCP forwarding is not allowed"),
        fail: low("TCP forwarding is allowed"),
        absent: low("TCP forwarding is allowed"),
    },
];

/// Parse a numeric directive. Out-of-range values clamp to the `i64` bounds so
/// they still compare on the correct side of every threshold.
fn parse_int(directive: &str, value: &str) -> Result<i64, RuleError> {
    match value.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(RuleError::InvalidInteger {
                directive: directive.to_string(),
                value: value.to_string(),
            }),
        },
    }
}

/// `Protocol` is set and equals 2. Missing or non-numeric values close the gate.
fn protocol_is_v2(directives: &Directives) -> bool {
    directives
        .get("Protocol")
        .and_then(|v| v.trim().parse::<i64>().ok())
        == Some(2)
}

fn run_check(check: &Check, directives: &Directives) -> Result<Finding, RuleError> {
    let gate_open = directives.contains(check.directive)
        && (!check.requires_protocol_2 || protocol_is_v2(directives));

    let outcome = match directives.get(check.compared) {
        Some(value) if gate_open => {
            if check.fails_when.matches(check.compared, value)? {
                check.fail
            } else {
                check.pass
            }
        }
        _ => check.absent,
    };

    Ok(Finding::new(
        check.id,
        check.directive,
        outcome.severity,
        outcome.message,
    ))
}

/// Run the whole checklist against parsed directives.
///
/// Returns one finding per check in checklist order, or the first error; no
/// partial list is ever returned.
pub fn evaluate(directives: &Directives) -> Result<Vec<Finding>, RuleError> {
    CHECKLIST
        .iter()
        .map(|check| run_check(check, directives))
        .collect()
}

/// Checks `sshd_config` files against SSH hardening practices
pub struct SshRule {
    info: RuleInfo,
}

impl SshRule {
    pub fn new() -> Self {
        Self::with_required_files(vec![PathBuf::from(DEFAULT_SSHD_CONFIG)])
    }

    /// Audit the given files instead of the default location
    pub fn with_required_files(required_files: Vec<PathBuf>) -> Self {
        Self {
            info: RuleInfo {
                short_name: "ssh",
                long_name: "Checks security problems on sshd config file",
                rule_type: RuleType::Config,
                required_files,
            },
        }
    }

    /// Audit one file. A file that is not there contributes nothing.
    pub fn analyze_file(
        &self,
        path: &Path,
        results: &mut CheckResults,
    ) -> Result<(), HostLensError> {
        if !scanner::is_regular_file(path) {
            tracing::debug!("Skipping {}: not a file", path.display());
            return Ok(());
        }

        let directives = conf::parse_file(path)?;
        let findings = evaluate(&directives).map_err(|e| RuleError::InFile {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        tracing::debug!(
            file = %path.display(),
            directives = directives.len(),
            findings = findings.len(),
            "Evaluated sshd config"
        );

        results.add_findings(findings);
        Ok(())
    }
}

impl Default for SshRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SshRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn analyze(&self, results: &mut CheckResults) -> Result<(), HostLensError> {
        for path in self.requires() {
            self.analyze_file(path, results)?;
        }
        Ok(())
    }
}
