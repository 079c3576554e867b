// src/noyau/arbre.rs
//
// Arbre d’expression binaire (entiers exacts).
// - Value : feuille, entier
// - Plus / Minus / Times / Divide : noeud interne, possède exactement deux enfants
//
// Chaque noeud possède ses enfants (Box) : pas de partage, pas de cycle,
// la libération du sous-arbre est automatique.
// Il n’existe pas de noeud “NoOp” : un symbole inconnu est refusé à la construction.

use num_bigint::BigInt;
use num_traits::Zero;

use std::fmt;

use super::erreur::{ErreurExpr, ResultatExpr};

/// Les quatre opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operateur {
    /// "+", "-", "*", "/" -> opérateur ; tout le reste est refusé.
    pub fn depuis_symbole(s: &str) -> ResultatExpr<Operateur> {
        match s {
            "+" => Ok(Operateur::Plus),
            "-" => Ok(Operateur::Minus),
            "*" => Ok(Operateur::Times),
            "/" => Ok(Operateur::Divide),
            _ => Err(ErreurExpr::UnrecognizedOperator(s.to_string())),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Times => '*',
            Operateur::Divide => '/',
        }
    }

    /// Combine deux valeurs. Division entière tronquée vers zéro.
    pub fn appliquer(self, a: BigInt, b: BigInt) -> ResultatExpr<BigInt> {
        Ok(match self {
            Operateur::Plus => a + b,
            Operateur::Minus => a - b,
            Operateur::Times => a * b,
            Operateur::Divide => {
                if b.is_zero() {
                    return Err(ErreurExpr::DivisionByZero);
                }
                a / b
            }
        })
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Value(BigInt),

    Plus(Box<Noeud>, Box<Noeud>),
    Minus(Box<Noeud>, Box<Noeud>),
    Times(Box<Noeud>, Box<Noeud>),
    Divide(Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn valeur(n: impl Into<BigInt>) -> Noeud {
        Noeud::Value(n.into())
    }

    /// Crée le noeud interne correspondant à `op` (gauche, droite).
    pub fn operateur(op: Operateur, gauche: Noeud, droite: Noeud) -> Noeud {
        let (g, d) = (Box::new(gauche), Box::new(droite));
        match op {
            Operateur::Plus => Noeud::Plus(g, d),
            Operateur::Minus => Noeud::Minus(g, d),
            Operateur::Times => Noeud::Times(g, d),
            Operateur::Divide => Noeud::Divide(g, d),
        }
    }

    /// Vue “opération” d’un noeud interne : (op, gauche, droite). None pour une feuille.
    pub fn operation(&self) -> Option<(Operateur, &Noeud, &Noeud)> {
        use Noeud::*;

        match self {
            Value(_) => None,
            Plus(a, b) => Some((Operateur::Plus, a, b)),
            Minus(a, b) => Some((Operateur::Minus, a, b)),
            Times(a, b) => Some((Operateur::Times, a, b)),
            Divide(a, b) => Some((Operateur::Divide, a, b)),
        }
    }

    /// Nombre de noeuds du sous-arbre (celui-ci compris).
    pub fn size(&self) -> usize {
        match self.operation() {
            None => 1,
            Some((_, a, b)) => a.size() + b.size() + 1,
        }
    }

    /// Évaluation récursive : gauche puis droite, puis combinaison.
    pub fn evaluate(&self) -> ResultatExpr<BigInt> {
        use Noeud::*;

        match self {
            Value(n) => Ok(n.clone()),
            Plus(a, b) => Operateur::Plus.appliquer(a.evaluate()?, b.evaluate()?),
            Minus(a, b) => Operateur::Minus.appliquer(a.evaluate()?, b.evaluate()?),
            Times(a, b) => Operateur::Times.appliquer(a.evaluate()?, b.evaluate()?),
            Divide(a, b) => Operateur::Divide.appliquer(a.evaluate()?, b.evaluate()?),
        }
    }
}

/// Étiquette du noeud seul : le nombre, ou le symbole de l’opérateur.
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Noeud::*;

        match self {
            Value(n) => write!(f, "{n}"),
            Plus(..) => write!(f, "{}", Operateur::Plus),
            Minus(..) => write!(f, "{}", Operateur::Minus),
            Times(..) => write!(f, "{}", Operateur::Times),
            Divide(..) => write!(f, "{}", Operateur::Divide),
        }
    }
}

/// Arbre d’expression : racine optionnelle + taille calculée une seule fois.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprTree {
    racine: Option<Noeud>,
    taille: usize,
}

impl ExprTree {
    /// Arbre vide (taille 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Prend possession de `racine` ; la taille est mise en cache ici.
    pub fn from_root(racine: Noeud) -> Self {
        let taille = racine.size();
        Self {
            racine: Some(racine),
            taille,
        }
    }

    pub fn root(&self) -> Option<&Noeud> {
        self.racine.as_ref()
    }

    /// Rend la racine (consomme l’arbre).
    pub fn into_root(self) -> Option<Noeud> {
        self.racine
    }

    pub fn size(&self) -> usize {
        self.taille
    }

    pub fn is_empty(&self) -> bool {
        self.taille == 0
    }

    /// Valeur de l’expression entière. Erreur si l’arbre est vide.
    pub fn evaluate_whole_tree(&self) -> ResultatExpr<BigInt> {
        self.racine
            .as_ref()
            .ok_or(ErreurExpr::EmptyTree)?
            .evaluate()
    }
}
