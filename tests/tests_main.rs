#[path = "helpers/mod.rs"]
mod helpers;

#[path = "hir/mod.rs"]
mod hir;

#[path = "ide/mod.rs"]
mod ide;

#[path = "syntax/mod.rs"]
mod syntax;
