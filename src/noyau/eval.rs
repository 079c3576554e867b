//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> postfixe -> arbre -> { valeur, préfixe, infixe, postfixe }
//!
//! C’est la seule porte d’entrée utilisée par l’UI : une chaîne en entrée,
//! un entier + trois notations + la démarche en sortie.

use num_bigint::BigInt;
use tracing::{debug, instrument};

use super::erreur::ResultatExpr;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{build_from_postfix, to_postfix};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub postfixe_jetons: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultat {
    pub valeur: BigInt,
    pub taille: usize,
    pub prefixe: String,
    pub infixe: String,
    pub postfixe: String,
}

/// API publique : évalue une expression et retourne la valeur + les trois notations,
/// avec la démarche (jetons, postfixe du convertisseur).
///
/// Entrée vide => EmptyTree (l’arbre construit n’a pas de racine).
#[instrument(level = "debug", err)]
pub fn eval_expression(expr_str: &str) -> ResultatExpr<(Resultat, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(expr_str);

    // 2) Postfixe
    let postfixe = to_postfix(&jetons)?;

    // 3) Arbre
    let arbre = build_from_postfix(&postfixe)?;

    // 4) Valeur (échoue aussi sur arbre vide)
    let valeur = arbre.evaluate_whole_tree()?;

    // 5) Rendus
    let prefixe = arbre.prefix_order()?;
    let infixe = arbre.infix_order()?;
    let postfixe_rendu = arbre.postfix_order()?;

    debug!(%valeur, taille = arbre.size(), "expression évaluée");

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        postfixe_jetons: format_tokens(&postfixe),
    };

    Ok((
        Resultat {
            valeur,
            taille: arbre.size(),
            prefixe,
            infixe,
            postfixe: postfixe_rendu,
        },
        d,
    ))
}
