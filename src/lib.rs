//! Arbre d’expression arithmétique (entiers, + - * /, parenthèses).
//!
//! Chaîne -> jetons -> postfixe -> arbre -> { valeur, préfixe, infixe, postfixe }.

pub mod noyau;

pub use noyau::{build_tree, eval_expression, tokenize, ErreurExpr, ExprTree};
