// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, KspdevError, KspdevResult, ProcessError, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("input stream closed");
    insta::assert_snapshot!(err.to_string(), @"fatal error: input stream closed");
}

#[test]
fn test_process_error_boxed_conversion() {
    let err: KspdevError = ProcessError::ExecutableNotFound {
        name: "ckan".to_string(),
    }
    .into();
    assert!(matches!(err, KspdevError::Process(_)));
}

#[test]
fn test_removal_timeout_display() {
    let err = FsError::RemovalTimeout {
        path: "/ksp/GameData/MyMod".to_string(),
        waited_ms: 2000,
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"'/ksp/GameData/MyMod' still present 2000 ms after removal"
    );
}

#[test]
fn test_kspdev_error_size() {
    // The Box<str> variant (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<KspdevError>();
    assert!(size <= 24, "KspdevError is {size} bytes, expected <= 24");
}

#[test]
fn test_kspdev_result_size() {
    let size = std::mem::size_of::<KspdevResult<()>>();
    assert!(size <= 24, "KspdevResult<()> is {size} bytes, expected <= 24");
}
