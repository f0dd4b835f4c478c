// src/noyau/jetons.rs

use super::erreurs::ErreurExpression;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral brut ([0-9.eE]+) : converti en f64 seulement à l’évaluation,
    // pour que l’erreur nomme le jeton tel que tapé.
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : produit par to_rpn uniquement (jamais par tokenize).
    Neg,

    LPar,
    RPar,
}

/// Caractères acceptés après normalisation.
fn est_permis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | 'e' | 'E')
}

fn est_chiffre_litteral(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E')
}

/// Normalisation d’affichage -> syntaxe interne :
/// - `x` -> `*`, `:` -> `/`
/// - virgule décimale -> point
/// - suppression de tous les espaces
pub fn normaliser(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'x' => '*',
            ':' => '/',
            ',' => '.',
            _ => c,
        })
        .collect()
}

/// Tokenize une chaîne DÉJÀ normalisée.
/// Supporte:
/// - littéraux décimaux, marqueur d’exposant sans signe (ex: 12.5, 1e5)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Le signe n’est jamais absorbé par le littéral : "1e-5" donne [Num("1e"), Minus, Num("5")].
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    // Charset d’abord : un caractère interdit prime sur toute autre erreur.
    if let Some(c) = s.chars().find(|c| !est_permis(*c)) {
        return Err(ErreurExpression::CaractereInvalide(c));
    }

    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_chiffre_litteral(c) {
            let start = i;
            while i < chars.len() && est_chiffre_litteral(chars[i]) {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        let t = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => return Err(ErreurExpression::CaractereInvalide(c)),
        };
        out.push(t);
        i += 1;
    }

    Ok(out)
}

/// Texte d’un opérateur (utile pour nommer un jeton fautif).
pub fn symbole(t: &Tok) -> String {
    match t {
        Tok::Num(s) => s.clone(),
        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),
        Tok::Neg => "neg".to_string(),
        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(symbole).collect::<Vec<_>>().join(" ")
}
