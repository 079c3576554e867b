// src/noyau/rendu.rs
//
// Rendu texte de l’arbre : préfixe, infixe, postfixe.
// - feuille : le nombre seul
// - noeud   : "op g d" / "g op d" / "g d op", séparés par un espace
//
// L’infixe ne remet AUCUNE parenthèse : "(1+2)*3" s’affiche "1 + 2 * 3".
// Un seul buffer String, rempli en descendant (pas de concaténations en cascade).

use super::arbre::{ExprTree, Noeud};
use super::erreur::{ErreurExpr, ResultatExpr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Prefixe,
    Infixe,
    Postfixe,
}

fn pousse(out: &mut String, morceau: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(morceau);
}

fn rendre_noeud(n: &Noeud, notation: Notation, out: &mut String) {
    let Some((op, g, d)) = n.operation() else {
        pousse(out, &n.to_string());
        return;
    };

    let symbole = op.symbole().to_string();
    match notation {
        Notation::Prefixe => {
            pousse(out, &symbole);
            rendre_noeud(g, notation, out);
            rendre_noeud(d, notation, out);
        }
        Notation::Infixe => {
            rendre_noeud(g, notation, out);
            pousse(out, &symbole);
            rendre_noeud(d, notation, out);
        }
        Notation::Postfixe => {
            rendre_noeud(g, notation, out);
            rendre_noeud(d, notation, out);
            pousse(out, &symbole);
        }
    }
}

/// Rend un sous-arbre dans la notation demandée.
pub fn format_noeud(n: &Noeud, notation: Notation) -> String {
    let mut out = String::new();
    rendre_noeud(n, notation, &mut out);
    out
}

/// Rend l’arbre entier. Arbre vide => EmptyTree.
pub fn format_arbre(t: &ExprTree, notation: Notation) -> ResultatExpr<String> {
    let racine = t.root().ok_or(ErreurExpr::EmptyTree)?;
    Ok(format_noeud(racine, notation))
}

pub fn prefix_order(t: &ExprTree) -> ResultatExpr<String> {
    format_arbre(t, Notation::Prefixe)
}

pub fn infix_order(t: &ExprTree) -> ResultatExpr<String> {
    format_arbre(t, Notation::Infixe)
}

pub fn postfix_order(t: &ExprTree) -> ResultatExpr<String> {
    format_arbre(t, Notation::Postfixe)
}

impl ExprTree {
    pub fn prefix_order(&self) -> ResultatExpr<String> {
        prefix_order(self)
    }

    pub fn infix_order(&self) -> ResultatExpr<String> {
        infix_order(self)
    }

    pub fn postfix_order(&self) -> ResultatExpr<String> {
        postfix_order(self)
    }
}
