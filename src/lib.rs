//! Simak — a listening-dictation quiz engine for Indonesian speech
//! clips.
//!
//! The engine presents an audio clip from a labeled corpus (Mozilla
//! Common Voice), collects transcription attempts, and scores them
//! with increasingly permissive feedback: exact match, partial word
//! overlap, a three-strike mistake limit, and a progressive hint
//! ladder.
//!
//! # Crate layout
//!
//! * [`corpus`] — manifest loading and the difficulty-partitioned
//!   catalog (built once at startup, read-only after).
//! * [`quiz`] — the session engine: matching, hints, the single-slot
//!   session state machine, and the serialized event loop.
//! * [`glossary`] — optional bilingual word dictionary shown with
//!   answers.
//! * [`trivia`] — optional "question of the day" list.
//! * [`schedule`] — the daily quiz prompt timer.
//! * [`config`] — TOML settings and platform paths.
//!
//! The binary in `main.rs` wires these together behind a line-oriented
//! console transport; any chat front end can do the same by feeding
//! [`quiz::QuizCommand`]s into [`quiz::run`] and delivering the
//! [`quiz::Reply`]s it emits.

pub mod config;
pub mod corpus;
pub mod glossary;
pub mod quiz;
pub mod schedule;
pub mod trivia;
