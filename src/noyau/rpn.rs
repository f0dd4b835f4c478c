// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en une seule passe
//
// Règles de signe:
// - '-' en tête d’une (sous-)expression : on injecte 0  => "-x" = "0 x -"
// - '+' en tête : signe neutre (ignoré)
// - '-' juste après un opérateur binaire : moins unaire (Tok::Neg), collé au facteur suivant
//   => "3*-2" = "3 2 neg *"
// - deux signes unaires de suite ("2+--3") : nombre invalide, l’erreur cite la chaîne tapée ("--3")
//
// Parenthèses:
// - "()" vaut 0
// - '(' jamais refermée ou ')' orpheline : parenthèses non équilibrées

use super::erreurs::ErreurExpression;
use super::jetons::{symbole, Tok};

/// Ce qui vient d’être lu (sert à classer les signes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lu {
    Debut,
    Valeur,
    Binaire,
    Signe,
}

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Sort de la pile tout opérateur de précédence >= `p` (sans traverser '(').
fn depiler(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, p: i32) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < p {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

fn operande_manquant() -> ErreurExpression {
    ErreurExpression::NombreInvalide(String::new())
}

/// Texte fautif d’une suite de signes : signes déjà lus + signes restants + littéral suivant.
fn chaine_de_signes(deja_lus: &str, reste: &[Tok]) -> String {
    let mut txt = deja_lus.to_string();
    for t in reste {
        match t {
            Tok::Plus | Tok::Minus => txt.push_str(&symbole(t)),
            Tok::Num(n) => {
                txt.push_str(n);
                break;
            }
            _ => break,
        }
    }
    txt
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("2"), Star, Minus, LPar, Num("3"), RPar]
///   rpn:    [Num("2"), Num("3"), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();
    let mut lu = Lu::Debut;
    // signes unaires tapés depuis la dernière valeur/opérateur binaire
    let mut signes = String::new();

    for (i, tok) in tokens.iter().cloned().enumerate() {
        if !matches!(tok, Tok::Plus | Tok::Minus) {
            signes.clear();
        }
        match tok {
            Tok::Num(_) => {
                if lu == Lu::Valeur {
                    // ")3" : opérateur manquant
                    return Err(ErreurExpression::NombreInvalide(symbole(&tok)));
                }
                out.push(tok);
                lu = Lu::Valeur;
            }

            Tok::LPar => {
                if lu == Lu::Valeur {
                    // "2(3)" : pas de multiplication implicite
                    return Err(ErreurExpression::NombreInvalide(symbole(&tok)));
                }
                ops.push(tok);
                lu = Lu::Debut;
            }

            Tok::RPar => {
                match lu {
                    Lu::Debut => out.push(Tok::Num("0".to_string())),
                    Lu::Binaire | Lu::Signe => return Err(operande_manquant()),
                    Lu::Valeur => {}
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurExpression::ParenthesesDesequilibrees),
                    }
                }

                lu = Lu::Valeur;
            }

            Tok::Plus | Tok::Minus => match lu {
                Lu::Valeur => {
                    depiler(&mut out, &mut ops, 1);
                    ops.push(tok);
                    lu = Lu::Binaire;
                }
                Lu::Debut => {
                    signes.push_str(&symbole(&tok));
                    if tok == Tok::Minus {
                        out.push(Tok::Num("0".to_string()));
                        ops.push(tok);
                        lu = Lu::Binaire;
                    } else {
                        lu = Lu::Signe;
                    }
                }
                Lu::Binaire => {
                    signes.push_str(&symbole(&tok));
                    if tok == Tok::Minus {
                        ops.push(Tok::Neg);
                    }
                    lu = Lu::Signe;
                }
                Lu::Signe => {
                    return Err(ErreurExpression::NombreInvalide(chaine_de_signes(
                        &signes,
                        &tokens[i..],
                    )));
                }
            },

            Tok::Star | Tok::Slash => {
                if lu != Lu::Valeur {
                    return Err(ErreurExpression::NombreInvalide(symbole(&tok)));
                }
                depiler(&mut out, &mut ops, 2);
                ops.push(tok);
                lu = Lu::Binaire;
            }

            // tokenize ne produit jamais Neg : une entrée qui en contient est mal formée
            Tok::Neg => return Err(ErreurExpression::NombreInvalide(symbole(&tok))),
        }
    }

    if matches!(lu, Lu::Binaire | Lu::Signe) {
        return Err(operande_manquant());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurExpression::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}
