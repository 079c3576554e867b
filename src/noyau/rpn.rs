// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe -> arbre
// Objectif:
// - Convertir une suite de jetons infixe en postfixe (une seule pile d’opérateurs)
// - Puis reconstruire l’arbre avec une pile de noeuds
//
// Règles:
// - à précédence égale on dépile : associativité à gauche (8-3-2 = 3, 8/4/2 = 1)
// - '(' a la précédence 0 : elle sert de barrière
// - parenthèses déséquilibrées / opérande manquante => MalformedExpression (jamais de panique)
// - profondeur bornée : évaluation, rendu et libération sont récursifs

use num_bigint::BigInt;
use tracing::{debug, trace};

use super::arbre::{ExprTree, Noeud, Operateur};
use super::erreur::{ErreurExpr, ResultatExpr};
use super::jetons::is_number;

/// Garde-fou : profondeur maximale de l’arbre (feuille = 1).
pub const PROFONDEUR_MAX: usize = 1024;

/// Précédence d’un symbole. Plus grand = lie plus fort.
/// Symbole inconnu => 3 (jamais comparé à une vraie barrière en entrée bien formée).
pub fn precedence(op: &str) -> u8 {
    match op {
        "(" => 0,
        "+" | "-" => 1,
        "*" | "/" => 2,
        _ => 3,
    }
}

/// Convertit une suite de jetons infixe en postfixe.
///
/// Exemple:
///   tokens:   ["(", "1", "+", "2", ")", "*", "3"]
///   postfixe: ["1", "2", "+", "3", "*"]
pub fn to_postfix(tokens: &[String]) -> ResultatExpr<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<&str> = Vec::new();

    // Case attendue : opérande (ou '(') au début, après '(' et après un opérateur ;
    // opérateur (ou ')') après un nombre ou une ')'.
    let mut attend_operande = true;

    for tok in tokens.iter().map(String::as_str) {
        match tok {
            "(" => {
                if !attend_operande {
                    return Err(ErreurExpr::malformee("'(' à la place d’un opérateur"));
                }
                ops.push(tok);
            }

            ")" => {
                if attend_operande {
                    return Err(ErreurExpr::malformee("opérande manquante avant ')'"));
                }

                // dépile jusqu’à '(' ; la '(' est jetée
                loop {
                    match ops.pop() {
                        Some("(") => break,
                        Some(op) => out.push(op.to_string()),
                        None => {
                            return Err(ErreurExpr::malformee(
                                "parenthèse fermante sans ouvrante",
                            ))
                        }
                    }
                }
            }

            _ if is_number(tok) => {
                if !attend_operande {
                    return Err(ErreurExpr::malformee(format!(
                        "nombre {tok} à la place d’un opérateur"
                    )));
                }
                out.push(tok.to_string());
                attend_operande = false;
            }

            _ => {
                if attend_operande {
                    return Err(ErreurExpr::malformee(format!(
                        "opérande manquante avant '{tok}'"
                    )));
                }
                while let Some(&top) = ops.last() {
                    if precedence(top) >= precedence(tok) {
                        out.push(top.to_string());
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(tok);
                attend_operande = true;
            }
        }
    }

    if attend_operande && !tokens.is_empty() {
        return Err(ErreurExpr::malformee("opérande manquante en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == "(" {
            return Err(ErreurExpr::malformee("parenthèse non fermée"));
        }
        out.push(op.to_string());
    }

    debug!(postfixe = %out.join(" "), "conversion infixe -> postfixe");
    Ok(out)
}

/// Construit l’arbre à partir d’une suite postfixe.
///
/// - nombre    => feuille Value
/// - opérateur => dépile droite PUIS gauche (le sommet est l’opérande de droite)
/// - pile vide à la fin => arbre vide
pub fn build_from_postfix(postfix: &[String]) -> ResultatExpr<ExprTree> {
    // (noeud, profondeur du sous-arbre)
    let mut st: Vec<(Noeud, usize)> = Vec::new();

    for tok in postfix {
        if is_number(tok) {
            let n = BigInt::parse_bytes(tok.as_bytes(), 10)
                .ok_or_else(|| ErreurExpr::malformee(format!("nombre invalide : {tok}")))?;
            st.push((Noeud::Value(n), 1));
            continue;
        }

        if tok == "(" || tok == ")" {
            return Err(ErreurExpr::malformee("parenthèse inattendue en postfixe"));
        }

        // Refus à la construction : pas de noeud “NoOp”.
        let op = Operateur::depuis_symbole(tok)?;

        let manque = || ErreurExpr::malformee(format!("opérande manquante pour '{tok}'"));
        let (droite, pd) = st.pop().ok_or_else(manque)?;
        let (gauche, pg) = st.pop().ok_or_else(manque)?;

        let profondeur = pg.max(pd) + 1;
        if profondeur > PROFONDEUR_MAX {
            return Err(ErreurExpr::malformee(format!(
                "expression trop profonde (plus de {PROFONDEUR_MAX} niveaux)"
            )));
        }

        trace!(%op, profondeur, "noeud opérateur");
        st.push((Noeud::operateur(op, gauche, droite), profondeur));
    }

    let racine = st.pop();
    if !st.is_empty() {
        return Err(ErreurExpr::malformee("opérande sans opérateur"));
    }

    Ok(match racine {
        Some((r, _)) => ExprTree::from_root(r),
        None => ExprTree::new(),
    })
}

/// Jetons infixe -> arbre (conversion postfixe incluse).
pub fn build_tree(tokens: &[String]) -> ResultatExpr<ExprTree> {
    let postfix = to_postfix(tokens)?;
    build_from_postfix(&postfix)
}
