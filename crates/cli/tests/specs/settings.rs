// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration specs

use crate::prelude::*;

#[test]
fn transmitters_become_a_mask() {
    let daemon = Daemon::tcp(vec![ok("SET_TRANSMITTERS 5")]);
    lircc().on(&daemon).args(&["transmitters", "1", "3"]).passes();
    assert_eq!(daemon.requests(), vec!["SET_TRANSMITTERS 5"]);
}

#[test]
fn transmitter_out_of_range_sends_nothing() {
    let daemon = Daemon::tcp(vec![]);
    lircc().on(&daemon).args(&["transmitters", "33"]).fails_with(1);
    assert!(daemon.requests().is_empty());
}

#[test]
fn input_log_with_and_without_path() {
    let daemon = Daemon::tcp(vec![ok("SET_INPUTLOG /tmp/ir.log"), ok("SET_INPUTLOG")]);
    lircc().on(&daemon).args(&["input-log", "/tmp/ir.log"]).passes();
    lircc().on(&daemon).args(&["input-log"]).passes();
    assert_eq!(daemon.requests(), vec!["SET_INPUTLOG /tmp/ir.log", "SET_INPUTLOG"]);
}

#[test]
fn driver_option() {
    let daemon = Daemon::tcp(vec![ok("DRV_OPTION mode fast")]);
    lircc().on(&daemon).args(&["driver-option", "mode", "fast"]).passes();
    assert_eq!(daemon.requests(), vec!["DRV_OPTION mode fast"]);
}

#[test]
fn simulate_joins_event_words() {
    let event = "SIMULATE 0000000000000001 00 KEY_UP tv";
    let daemon = Daemon::tcp(vec![ok(event)]);
    lircc()
        .on(&daemon)
        .args(&["simulate", "0000000000000001", "00", "KEY_UP", "tv"])
        .passes();
    assert_eq!(daemon.requests(), vec![event]);
}

#[test]
fn unexpected_data_is_a_warning() {
    let daemon = Daemon::tcp(vec![data("DRV_OPTION mode fast", &["applied"])]);
    lircc()
        .on(&daemon)
        .args(&["driver-option", "mode", "fast"])
        .passes()
        .stderr_has("unexpected reply data: applied");
}
