// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Cursor;

use super::Prompt;
use crate::error::KspdevError;

fn scripted(script: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    Prompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false)
}

#[test]
fn test_yes_no_first_letter_match() {
    for answer in ["y\n", "Y\n", "yes\n", "Yes\n", "yep\n"] {
        let mut prompt = scripted(answer);
        assert!(prompt.ask_yes_no("Continue?", false).unwrap(), "{answer:?}");
    }
    for answer in ["n\n", "N\n", "no\n", "No\n", "nope\n"] {
        let mut prompt = scripted(answer);
        assert!(!prompt.ask_yes_no("Continue?", true).unwrap(), "{answer:?}");
    }
}

#[test]
fn test_yes_no_empty_resolves_to_default() {
    let mut prompt = scripted("\n");
    assert!(prompt.ask_yes_no("Continue?", true).unwrap());

    let mut prompt = scripted("\n");
    assert!(!prompt.ask_yes_no("Continue?", false).unwrap());
}

#[test]
fn test_yes_no_rejects_garbage_and_reprompts() {
    let mut prompt = scripted("maybe\nwhat\ny\n");
    assert!(prompt.ask_yes_no("Continue?", false).unwrap());

    let output = String::from_utf8(prompt.into_output()).unwrap();
    assert_eq!(output.matches("Invalid response.").count(), 2);
    assert_eq!(output.matches("Continue? [y/N]: ").count(), 3);
}

#[test]
fn test_yes_no_default_hint_tracks_default() {
    let mut prompt = scripted("\n");
    prompt.ask_yes_no("Proceed?", true).unwrap();
    let output = String::from_utf8(prompt.into_output()).unwrap();
    assert!(output.contains("[Y/n]"));

    let mut prompt = scripted("\n");
    prompt.ask_yes_no("Proceed?", false).unwrap();
    let output = String::from_utf8(prompt.into_output()).unwrap();
    assert!(output.contains("[y/N]"));
}

#[test]
fn test_yes_no_assume_default_reads_nothing() {
    let mut prompt = Prompt::new(Cursor::new(Vec::new()), Vec::new(), true);
    assert!(prompt.ask_yes_no("Continue?", true).unwrap());
    assert!(!prompt.ask_yes_no("Continue?", false).unwrap());
}

#[test]
fn test_end_of_input_bails() {
    let mut prompt = scripted("");
    let err = prompt.ask_yes_no("Continue?", true).unwrap_err();
    assert!(matches!(err, KspdevError::Bailed(_)));

    let mut prompt = scripted("garbage\n");
    let err = prompt.ask_yes_no("Continue?", true).unwrap_err();
    assert!(matches!(err, KspdevError::Bailed(_)));
}

#[test]
fn test_ask_until_predicate() {
    let mut prompt = scripted("\nnot-it\nok-fine\n");
    let answer = prompt
        .ask_until("Enter value: ", "Invalid value.", |s| s.starts_with("ok"))
        .unwrap();
    assert_eq!(answer, "ok-fine");

    let output = String::from_utf8(prompt.into_output()).unwrap();
    assert_eq!(output.matches("Invalid value.").count(), 2);
}

#[test]
fn test_ask_nonempty_skips_blank_lines() {
    let mut prompt = scripted("\n\nAwesomeMod\n");
    let answer = prompt.ask_nonempty("Identifier: ").unwrap();
    assert_eq!(answer, "AwesomeMod");
}

#[test]
fn test_answer_is_trimmed() {
    let mut prompt = scripted("  AwesomeMod  \n");
    let answer = prompt.ask_nonempty("Identifier: ").unwrap();
    assert_eq!(answer, "AwesomeMod");
}
