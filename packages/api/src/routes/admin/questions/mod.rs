//! Question bank authoring routes.
//!
//! Banks hold a superset of questions; `questions_per_attempt` caps how
//! many the learner flow serves per attempt. A bank without a unit is a
//! final-exam bank and carries an exam form identifier (A/B).

pub mod create_bank;
pub mod create_question;
pub mod delete_bank;
pub mod delete_question;
pub mod list_banks;
pub mod list_questions;
pub mod update_bank;
pub mod update_question;
