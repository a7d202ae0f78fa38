//! Harness command: run the built-in boundary-word suite and report which
//! criterion each word lands on.

use serde::Serialize;

use polytile::Criterion;

/// Words with known outcomes. `None` means the word is a valid boundary
/// that admits no isohedral tiling.
const SUITE: &[(&str, Option<Criterion>)] = &[
    ("urdl", Some(Criterion::Translation)),
    ("rrdllu", Some(Criterion::Translation)),
    ("rrddrurddrdllldldluullurrruluu", Some(Criterion::Translation)),
    (
        "rddrurdruuurdrdrdrdldrddrdllululdddluldluullurrulllllurruuur",
        Some(Criterion::HalfTurn),
    ),
    (
        "druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur",
        Some(Criterion::QuarterTurn),
    ),
    (
        "rrrdrdddrurdddddlulddlullldluululuuurururu",
        Some(Criterion::TypeOneReflection),
    ),
    (
        "ruuurddrrddldrrrdlddddllluuldddlulluuuuluulurrrurd",
        Some(Criterion::TypeTwoReflection),
    ),
    (
        "urrdrrdlddlddldrrrrdldllulldlullurrululurrullururr",
        Some(Criterion::TypeOneHalfTurnReflection),
    ),
    (
        "drdrdllddrurddddlllddldluurulluulluurdruurdruulurrur",
        Some(Criterion::TypeTwoHalfTurnReflection),
    ),
    ("rdddrdlldllururuuu", None),
];

#[derive(Serialize)]
struct HarnessResult {
    word: String,
    length: usize,
    expected: Option<&'static str>,
    got: Option<&'static str>,
    ok: bool,
}

#[derive(Serialize)]
struct HarnessReport {
    passed: usize,
    failed: usize,
    results: Vec<HarnessResult>,
}

pub fn cmd_harness(args: &[String]) {
    let json = args.iter().any(|a| a == "--json");

    let mut results = Vec::new();
    let mut passed = 0;
    let mut failed = 0;

    for &(word, expected) in SUITE {
        let got = match polytile::analyze(word) {
            Ok(solution) => solution.map(|s| s.criterion),
            Err(err) => {
                eprintln!("harness: '{}' unexpectedly malformed: {}", word, err);
                failed += 1;
                results.push(HarnessResult {
                    word: word.to_string(),
                    length: word.len(),
                    expected: expected.map(|c| c.name()),
                    got: None,
                    ok: false,
                });
                continue;
            }
        };
        let ok = got == expected;
        if ok {
            passed += 1;
        } else {
            failed += 1;
        }
        results.push(HarnessResult {
            word: word.to_string(),
            length: word.len(),
            expected: expected.map(|c| c.name()),
            got: got.map(|c| c.name()),
            ok,
        });
    }

    if json {
        let report = HarnessReport { passed, failed, results };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("{:<62} {:>4}  {:<28} {}", "word", "len", "criterion", "status");
        for r in &results {
            println!(
                "{:<62} {:>4}  {:<28} {}",
                r.word,
                r.length,
                r.got.unwrap_or("-"),
                if r.ok { "ok" } else { "FAIL" }
            );
        }
        println!();
        println!("passed: {}  failed: {}", passed, failed);
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
