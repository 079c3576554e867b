//! Noyau arbre d’expression
//!
//! Organisation interne :
//! - jetons.rs : tokenisation (chaînes, classification à l’usage)
//! - rpn.rs    : shunting-yard + construction de l’arbre
//! - arbre.rs  : Noeud / ExprTree + évaluation
//! - rendu.rs  : préfixe / infixe / postfixe
//! - erreur.rs : taxonomie d’erreurs
//! - eval.rs   : pipeline complet (pour l’UI)

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rendu;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique
pub use arbre::{ExprTree, Noeud, Operateur};
pub use erreur::{ErreurExpr, ResultatExpr};
pub use eval::{eval_expression, DemarcheNoyau, Resultat};
pub use jetons::{format_tokens, is_number, tokenize};
pub use rendu::{infix_order, postfix_order, prefix_order, Notation};
pub use rpn::{build_from_postfix, build_tree, precedence, to_postfix, PROFONDEUR_MAX};
