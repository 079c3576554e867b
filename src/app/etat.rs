//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Contient l’entrée, les résultats (valeur, taille, trois notations), l’erreur
//! et la démarche, avec les opérations simples C / CLR / AC.
//! Aucune évaluation ici.

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
}

/// Sorties affichées après une évaluation réussie.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Sorties {
    pub valeur: String,
    pub taille: usize,
    pub prefixe: String,
    pub infixe: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub sorties: Sorties,
    pub sorties_dispo: bool, // false au démarrage / après CLR / après erreur
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            sorties: Sorties::default(),
            sorties_dispo: false,
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.sorties = Sorties::default();
        self.sorties_dispo = false;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur : les sorties et la démarche précédentes ne valent plus rien.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.sorties = Sorties::default();
        self.sorties_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet.
    pub fn set_resultats(&mut self, sorties: Sorties, demarche: Demarche) {
        self.erreur.clear();
        self.sorties = sorties;
        self.sorties_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les blancs qui le précèdent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorties_exemple() -> Sorties {
        Sorties {
            valeur: "9".into(),
            taille: 5,
            prefixe: "* + 1 2 3".into(),
            infixe: "1 + 2 * 3".into(),
            postfixe: "1 2 + 3 *".into(),
        }
    }

    #[test]
    fn erreur_efface_sorties() {
        let mut app = AppCalc::default();
        app.set_resultats(sorties_exemple(), Demarche::default());
        assert!(app.sorties_dispo);

        app.set_erreur("division par zéro");
        assert!(!app.sorties_dispo);
        assert_eq!(app.sorties, Sorties::default());
        assert_eq!(app.erreur, "division par zéro");
    }

    #[test]
    fn c_clr_ac() {
        let mut app = AppCalc::default();
        app.entree = "(1+2)*3".into();
        app.set_resultats(sorties_exemple(), Demarche::default());

        app.clear_entree();
        assert!(app.entree.is_empty());
        assert!(app.sorties_dispo);

        app.entree = "4".into();
        app.clear_resultats();
        assert_eq!(app.entree, "4");
        assert!(!app.sorties_dispo);

        app.set_erreur("x");
        app.reset_total();
        assert!(app.entree.is_empty());
        assert!(app.erreur.is_empty());
    }

    #[test]
    fn backspace_saute_les_blancs() {
        let mut app = AppCalc::default();
        app.entree = "12 + ".into();
        app.backspace_entree();
        assert_eq!(app.entree, "12");
        app.backspace_entree();
        assert_eq!(app.entree, "1");
        app.backspace_entree();
        app.backspace_entree();
        assert!(app.entree.is_empty());
    }
}
