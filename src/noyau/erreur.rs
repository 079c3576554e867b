// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Toutes les erreurs remontent à l’appelant immédiat (pas de reprise interne).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurExpr {
    /// Parenthèses déséquilibrées, opérande manquante ou orpheline.
    #[error("expression malformée : {raison}")]
    MalformedExpression { raison: String },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("arbre vide")]
    EmptyTree,

    /// Symbole hors de {+, -, *, /} au moment de créer un noeud opérateur.
    #[error("opérateur non reconnu : '{0}'")]
    UnrecognizedOperator(String),
}

impl ErreurExpr {
    pub fn malformee(raison: impl Into<String>) -> Self {
        ErreurExpr::MalformedExpression {
            raison: raison.into(),
        }
    }
}

pub type ResultatExpr<T> = Result<T, ErreurExpr>;
