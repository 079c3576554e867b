//! Tests de propriétés (campagne) : invariants du pipeline sur expressions générées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - valeur de référence calculée pendant la génération (indépendante du noyau)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::Zero;

use super::{build_tree, eval_expression, to_postfix, tokenize, ErreurExpr};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (texte + référence) ------------------------ */

/// Expression générée : texte entièrement parenthésé, valeur attendue, nombre de noeuds.
struct Genere {
    texte: String,
    valeur: BigInt,
    noeuds: usize,
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> Genere {
    if profondeur == 0 || rng.pick(4) == 0 {
        let n = rng.pick(1000);
        return Genere {
            texte: n.to_string(),
            valeur: BigInt::from(n),
            noeuds: 1,
        };
    }

    let g = gen_expr(rng, profondeur - 1);
    let d = gen_expr(rng, profondeur - 1);

    let mut op = ['+', '-', '*', '/'][rng.pick(4) as usize];
    if op == '/' && d.valeur.is_zero() {
        // la division par zéro a son propre test
        op = '+';
    }

    let valeur = match op {
        '+' => &g.valeur + &d.valeur,
        '-' => &g.valeur - &d.valeur,
        '*' => &g.valeur * &d.valeur,
        _ => &g.valeur / &d.valeur,
    };

    // espaces aléatoires : le tokenizer doit les ignorer
    let sep = if rng.coin() { " " } else { "" };
    Genere {
        texte: format!("({}{sep}{op}{sep}{})", g.texte, d.texte),
        valeur,
        noeuds: g.noeuds + d.noeuds + 1,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn prop_valeur_et_taille() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 6);
        let arbre = build_tree(&tokenize(&g.texte))
            .unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));

        assert_eq!(arbre.evaluate_whole_tree(), Ok(g.valeur.clone()), "expr={:?}", g.texte);
        assert_eq!(arbre.size(), g.noeuds, "expr={:?}", g.texte);
    }
}

#[test]
fn prop_postfixe_rendu_egal_conversion() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        let g = gen_expr(&mut rng, 5);
        let jetons = tokenize(&g.texte);
        let conversion = to_postfix(&jetons).unwrap().join(" ");
        let arbre = build_tree(&jetons).unwrap();

        assert_eq!(arbre.postfix_order().unwrap(), conversion, "expr={:?}", g.texte);
    }
}

#[test]
fn prop_notations_meme_nombre_de_jetons() {
    let mut rng = Rng::new(42);

    for _ in 0..150 {
        let g = gen_expr(&mut rng, 5);
        let arbre = build_tree(&tokenize(&g.texte)).unwrap();

        for rendu in [
            arbre.prefix_order().unwrap(),
            arbre.infix_order().unwrap(),
            arbre.postfix_order().unwrap(),
        ] {
            assert_eq!(rendu.split(' ').count(), arbre.size(), "rendu={rendu:?}");
        }
    }
}

#[test]
fn prop_aller_retour_infixe_sans_ambiguite() {
    // Sommes et produits purs : l’infixe sans parenthèses garde la même valeur.
    let mut rng = Rng::new(7);

    for _ in 0..100 {
        let op = if rng.coin() { "+" } else { "*" };
        let n = 2 + rng.pick(6) as usize;
        let termes: Vec<String> = (0..n).map(|_| (1 + rng.pick(9)).to_string()).collect();
        let expr = format!("({})", termes.join(op));

        let arbre = build_tree(&tokenize(&expr)).unwrap();
        let infixe = arbre.infix_order().unwrap();
        let rebati = build_tree(&tokenize(&infixe)).unwrap();

        assert_eq!(rebati.evaluate_whole_tree(), arbre.evaluate_whole_tree(), "expr={expr:?}");
    }
}

#[test]
fn prop_division_par_zero_jamais_silencieuse() {
    let mut rng = Rng::new(0xDEAD_u64);

    for _ in 0..80 {
        let g = gen_expr(&mut rng, 3);
        let expr = format!("{}/(7-7)", g.texte);
        assert_eq!(
            eval_expression(&expr).unwrap_err(),
            ErreurExpr::DivisionByZero,
            "expr={expr:?}"
        );
    }
}

#[test]
fn prop_parenthese_retiree_malformee() {
    let mut rng = Rng::new(99);

    for _ in 0..80 {
        let g = gen_expr(&mut rng, 4);
        if !g.texte.starts_with('(') {
            continue;
        }
        // retire la dernière ')' : il reste une '(' ouverte
        let tronque = &g.texte[..g.texte.len() - 1];
        assert!(
            matches!(
                build_tree(&tokenize(tronque)),
                Err(ErreurExpr::MalformedExpression { .. })
            ),
            "expr={tronque:?}"
        );
    }
}

#[test]
fn prop_chaine_longue_associativite_gauche() {
    // 1000 - 1 - 1 - ... (999 fois) = 1
    let expr = format!("1000{}", "-1".repeat(999));
    let (r, _d) = eval_expression(&expr).unwrap();
    assert_eq!(r.valeur, BigInt::from(1));
    assert_eq!(r.taille, 1999);
}
