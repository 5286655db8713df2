pub mod gerrit;
pub mod git;
