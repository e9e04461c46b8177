// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query command specs

use crate::prelude::*;

#[test]
fn remotes_one_per_line() {
    let daemon = Daemon::tcp(vec![data("LIST", &["living", "bedroom"])]);
    lircc().on(&daemon).args(&["remotes"]).passes().stdout_eq("living\nbedroom\n");
    assert_eq!(daemon.requests(), vec!["LIST"]);
}

#[test]
fn remotes_as_json() {
    let daemon = Daemon::tcp(vec![data("LIST", &["living", "bedroom"])]);
    let out = lircc().on(&daemon).args(&["remotes", "--output", "json"]).passes();
    assert_eq!(out.stdout_json(), serde_json::json!(["living", "bedroom"]));
}

#[test]
fn commands_strip_codes_by_default() {
    let reply = ["0000000000000001 KEY_POWER", "0000000000000002 KEY_MUTE"];
    let daemon = Daemon::tcp(vec![data("LIST tv", &reply), data("LIST tv", &reply)]);

    lircc().on(&daemon).args(&["commands", "tv"]).passes().stdout_eq("KEY_POWER\nKEY_MUTE\n");
    lircc()
        .on(&daemon)
        .args(&["commands", "tv", "--codes"])
        .passes()
        .stdout_has("0000000000000001 KEY_POWER");
}

#[test]
fn version_text_and_json() {
    let daemon = Daemon::tcp(vec![data("VERSION", &["0.10.1"]), data("VERSION", &["0.10.1"])]);
    lircc().on(&daemon).args(&["version"]).passes().stdout_eq("0.10.1\n");
    let out = lircc().on(&daemon).args(&["version", "-o", "json"]).passes();
    assert_eq!(out.stdout_json()["version"], "0.10.1");
}

#[test]
fn socket_path_from_environment() {
    let daemon = Daemon::unix(vec![data("LIST", &["tv"])]);
    lircc()
        .env("LIRC_SOCKET_PATH", daemon.socket())
        .args(&["remotes"])
        .passes()
        .stdout_eq("tv\n");
}

#[test]
fn device_flag_selects_socket() {
    let daemon = Daemon::unix(vec![data("LIST", &["tv"])]);
    let socket = daemon.socket().to_str().unwrap().to_string();
    lircc().args(&["-d", &socket, "remotes"]).passes().stdout_eq("tv\n");
}

#[test]
fn verbose_prints_lines_verbatim() {
    let daemon = Daemon::tcp(vec![data("LIST", &["say \"hi\"", "back\\slash"])]);
    lircc()
        .on(&daemon)
        .args(&["--verbose", "remotes"])
        .passes()
        .stderr_has("Received: \"say \"hi\"\"")
        .stderr_has("Received: \"back\\slash\"");
}
