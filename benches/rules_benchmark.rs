use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hostlens::rules::categories::ssh::{evaluate, SshRule};
use hostlens::rules::{CheckResults, Rule};
use hostlens::scanner::conf::parse_str;
use std::fs;
use tempfile::TempDir;

fn sshd_config(scenario: &str) -> String {
    match scenario {
        "empty" => String::new(),
        "hardened" => "Port 2222\nProtocol 2\nPermitRootLogin no\nLoginGraceTime 20\n\
                       ClientAliveInterval 60\nClientAliveCountMax 2\nMaxAuthTries 3\n\
                       MaxSessions 2\nPermitEmptyPasswords no\nIgnoreRhosts yes\n\
                       X11Forwarding no\nAllowTcpForwarding no\n"
            .to_string(),
        // Distribution default: mostly comments
        "commented" => {
            let mut content = String::new();
            for i in 0..200 {
                content.push_str(&format!("# Option{} value{}\n\n", i, i));
            }
            content.push_str("Protocol 2\nUsePAM yes\nSubsystem sftp /usr/lib/openssh/sftp-server\n");
            content
        }
        _ => unreachable!(),
    }
}

fn bench_parse_and_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ssh_evaluate");

    for scenario in ["empty", "hardened", "commented"] {
        let content = sshd_config(scenario);
        group.bench_with_input(BenchmarkId::from_parameter(scenario), &content, |b, content| {
            b.iter(|| {
                let directives = parse_str(black_box(content));
                evaluate(&directives).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_rule_from_disk(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sshd_config");
    fs::write(&path, sshd_config("hardened")).unwrap();
    let rule = SshRule::with_required_files(vec![path]);

    c.bench_function("ssh_rule_analyze", |b| {
        b.iter(|| {
            let mut results = CheckResults::new();
            rule.analyze(&mut results).unwrap();
            results
        })
    });
}

criterion_group!(benches, bench_parse_and_evaluate, bench_rule_from_disk);
criterion_main!(benches);
