//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> charset + jetons -> RPN -> évaluation f64
//!
//! Aucun arrondi ici : l’appelant arrondit le résultat final pour l’affichage
//! (6 chiffres significatifs en général).

use log::debug;

use super::erreurs::{ErreurCalcul, ErreurExpression};
use super::jetons::{format_tokens, normaliser, tokenize, Tok};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Convertit un littéral brut en f64 (l’erreur nomme le jeton).
fn lire_nombre(s: &str) -> Result<f64, ErreurExpression> {
    s.parse::<f64>()
        .map_err(|_| ErreurExpression::NombreInvalide(s.to_string()))
}

/// Évalue une RPN. Vide => 0.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurExpression> {
    let manque = || ErreurExpression::NombreInvalide(String::new());
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(s) => st.push(lire_nombre(s)?),

            Tok::Neg => {
                let x = st.pop().ok_or_else(manque)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(manque)?;
                let a = st.pop().ok_or_else(manque)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b == 0.0 {
                            return Err(ErreurExpression::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurExpression::ParenthesesDesequilibrees),
        }
    }

    match st.as_slice() {
        [] => Ok(0.0),
        [v] => Ok(*v),
        _ => Err(manque()),
    }
}

/// Évalue une expression et retourne aussi la démarche (jetons, RPN).
pub fn evaluer_avec_demarche(expr_str: &str) -> Result<(f64, Demarche), ErreurExpression> {
    // 1) Normalisation (x, :, virgule, espaces)
    let normalisee = normaliser(expr_str);

    // 2) Jetons (charset vérifié ici)
    let jetons = tokenize(&normalisee)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    let d = Demarche {
        normalisee,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!("jetons: {} | rpn: {}", d.jetons, d.rpn);

    // 4) Évaluation
    let v = eval_rpn(&rpn)?;
    Ok((v, d))
}

/// API du noyau : évalue une expression arithmétique en f64.
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurExpression> {
    evaluer_avec_demarche(expr_str).map(|(v, _)| v)
}

/// Point d’entrée exposé aux collaborateurs (UI, calculatrices).
pub fn evaluate_expression(text: &str) -> Result<f64, ErreurCalcul> {
    Ok(evaluer(text)?)
}
