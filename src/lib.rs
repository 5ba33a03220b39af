//! Hangman Solver
//!
//! A Hangman guessing engine that narrows a dictionary to words consistent with the
//! revealed pattern and picks the next letter by frequency or information entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{LetterSet, Pattern, Word};
//! use hangman_solver::solver::{Engine, FilterMode, Guess, Strategy, TurnState};
//!
//! let dictionary = vec![
//!     Word::new("cat").unwrap(),
//!     Word::new("car").unwrap(),
//!     Word::new("can").unwrap(),
//!     Word::new("cap").unwrap(),
//! ];
//!
//! let engine = Engine::new(&dictionary, Strategy::Frequency, FilterMode::Simple);
//! let state = TurnState {
//!     pattern: "c__".parse::<Pattern>().unwrap(),
//!     excluded: LetterSet::EMPTY,
//!     candidates: None,
//! };
//!
//! let turn = engine.suggest(&state).unwrap();
//! assert_eq!(turn.guess, Guess::Letter(b'a')); // 'a' appears in all four words
//! ```

// Core domain types
pub mod core;

// Candidate filtering, letter scoring, and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations (the evaluator layer)
pub mod commands;

// Terminal output formatting
pub mod output;
