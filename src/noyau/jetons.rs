// src/noyau/jetons.rs
//
// Un jeton est une simple chaîne : aucun type n’est stocké.
// La classification (nombre / symbole) se fait à l’usage via is_number().

use tracing::trace;

/// Vrai si `s` est un entier non négatif : non vide, uniquement des chiffres décimaux.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Tokenize une chaîne en jetons.
///
/// - les blancs sont ignorés
/// - un chiffre qui suit un jeton entièrement numérique y est collé ("12" reste "12")
/// - tout autre caractère devient un jeton d’un seul caractère
///
/// Aucune validation ici : "1 2" donne ["12"], "a+1" donne ["a", "+", "1"].
/// C’est la conversion / la construction de l’arbre qui refusent ce qui est faux.
pub fn tokenize(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        // Chiffre après un nombre : on prolonge le dernier jeton
        if c.is_ascii_digit() {
            if let Some(dernier) = out.last_mut() {
                if is_number(dernier) {
                    dernier.push(c);
                    continue;
                }
            }
        }

        out.push(c.to_string());
    }

    trace!(nb = out.len(), "jetons produits");
    out
}

/// Format utilitaire (démarche) : liste de jetons séparés par des espaces.
pub fn format_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
