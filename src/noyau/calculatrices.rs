// src/noyau/calculatrices.rs
//
// Calculatrices du menu principal
// -------------------------------
// Ensemble FERMÉ de variantes (Base, Géométrie, Fonctions), aiguillées par un seul `match`.
// Chaque commande reçoit ses paramètres en texte brut et rend (texte d’affichage, Valeur).

use num_bigint::BigUint;
use num_rational::Rational64;

use super::arrondi::arrondi6;
use super::erreurs::ErreurCalcul;
use super::eval::evaluer;
use super::fonctions;
use super::format::{affichage_expression, format_nombre};
use super::triangle::{solve_triangle, MethodeTriangle, SolutionTriangle};

#[derive(Clone, Copy, Debug)]
pub struct Commande {
    pub nom: &'static str,
    pub parametres: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct InfoCalculatrice {
    pub nom: &'static str,
    pub commandes: &'static [Commande],
}

const COMMANDES_BASE: &[Commande] = &[Commande {
    nom: "Calcul",
    parametres: &["Expression"],
}];

const COMMANDES_GEOMETRIE: &[Commande] = &[
    Commande {
        nom: "Triangle",
        parametres: &[
            "Méthode",
            "Côté a",
            "Côté b",
            "Côté c",
            "Angle A (°)",
            "Angle B (°)",
            "Angle C (°)",
            "Hauteur h",
        ],
    },
    Commande {
        nom: "Cercle",
        parametres: &["Rayon"],
    },
    Commande {
        nom: "Parallélogramme",
        parametres: &["Côté a", "Côté b", "Hauteur h"],
    },
];

const COMMANDES_FONCTIONS: &[Commande] = &[
    Commande {
        nom: "Factorielle",
        parametres: &["n"],
    },
    Commande {
        nom: "Racine carrée",
        parametres: &["x"],
    },
    Commande {
        nom: "Puissance",
        parametres: &["Base", "Exposant"],
    },
    Commande {
        nom: "Nombres premiers",
        parametres: &["Borne inférieure", "Borne supérieure"],
    },
    Commande {
        nom: "Décimal en fraction",
        parametres: &["Décimal"],
    },
];

/// Noms internes des champs triangle, dans l’ordre des paramètres 1..=7 de "Triangle".
const CHAMPS_TRIANGLE: [&str; 7] = ["a", "b", "c", "angle_a", "angle_b", "angle_c", "hauteur"];

/// Résultat typé d’une commande.
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Nombre(f64),
    Couple(f64, f64),
    Triangle(SolutionTriangle),
    Entier(BigUint),
    Premiers(Vec<u64>),
    Fraction(Rational64),
}

impl Valeur {
    /// Texte court (colonne “résultat” du journal).
    pub fn texte(&self) -> String {
        match self {
            Valeur::Nombre(v) => format_nombre(*v),
            Valeur::Couple(x, y) => format!("({}, {})", format_nombre(*x), format_nombre(*y)),
            Valeur::Triangle(SolutionTriangle::Complete(r)) => format!(
                "a={}, b={}, c={}, A={}°, B={}°, C={}°, aire={}",
                format_nombre(r.a),
                format_nombre(r.b),
                format_nombre(r.c),
                format_nombre(r.angle_a),
                format_nombre(r.angle_b),
                format_nombre(r.angle_c),
                format_nombre(r.aire),
            ),
            Valeur::Triangle(SolutionTriangle::AireSeule { aire, .. }) => {
                format!("aire={}", format_nombre(*aire))
            }
            Valeur::Entier(n) => n.to_string(),
            Valeur::Premiers(v) => format!(
                "[{}]",
                v.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
            ),
            Valeur::Fraction(r) => format!("{}/{}", r.numer(), r.denom()),
        }
    }
}

/* ------------------------ Lecture des paramètres ------------------------ */

fn brut<'a>(params: &[&'a str], i: usize, nom: &str) -> Result<&'a str, ErreurCalcul> {
    params
        .get(i)
        .copied()
        .ok_or_else(|| ErreurCalcul::ParametreInvalide(format!("{nom} manquant")))
}

fn param_f64(params: &[&str], i: usize, nom: &str) -> Result<f64, ErreurCalcul> {
    let s = brut(params, i, nom)?;
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ErreurCalcul::ParametreInvalide(format!("{nom}: '{s}'")))
}

fn param_i64(params: &[&str], i: usize, nom: &str) -> Result<i64, ErreurCalcul> {
    let s = brut(params, i, nom)?;
    s.trim()
        .parse::<i64>()
        .map_err(|_| ErreurCalcul::ParametreInvalide(format!("{nom}: '{s}' (entier attendu)")))
}

/* ------------------------ Aiguillage ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Calculatrice {
    Base,
    Geometrie,
    Fonctions,
}

impl Calculatrice {
    pub const TOUTES: [Calculatrice; 3] = [
        Calculatrice::Base,
        Calculatrice::Geometrie,
        Calculatrice::Fonctions,
    ];

    pub fn info(self) -> InfoCalculatrice {
        match self {
            Calculatrice::Base => InfoCalculatrice {
                nom: "Calculatrice de base",
                commandes: COMMANDES_BASE,
            },
            Calculatrice::Geometrie => InfoCalculatrice {
                nom: "Géométrie",
                commandes: COMMANDES_GEOMETRIE,
            },
            Calculatrice::Fonctions => InfoCalculatrice {
                nom: "Fonctions mathématiques",
                commandes: COMMANDES_FONCTIONS,
            },
        }
    }

    /// Exécute une commande : (texte d’affichage, valeur).
    pub fn executer(
        self,
        commande: &str,
        params: &[&str],
    ) -> Result<(String, Valeur), ErreurCalcul> {
        match (self, commande) {
            (Calculatrice::Base, "Calcul") => {
                let expr = params.first().copied().unwrap_or("");
                let r = arrondi6(evaluer(expr)?);
                Ok((
                    format!("NR: {} = {}", affichage_expression(expr), format_nombre(r)),
                    Valeur::Nombre(r),
                ))
            }

            (Calculatrice::Geometrie, "Triangle") => {
                let methode: MethodeTriangle = brut(params, 0, "Méthode")?.parse()?;
                let champs = CHAMPS_TRIANGLE
                    .iter()
                    .copied()
                    .zip(params.iter().skip(1).copied());
                let s = solve_triangle(methode, champs)?;
                Ok((s.texte(), Valeur::Triangle(s)))
            }
            (Calculatrice::Geometrie, "Cercle") => {
                let r = param_f64(params, 0, "Rayon")?;
                let (circ, aire) = fonctions::cercle(r)?;
                Ok((
                    format!(
                        "Géométrie cercle : r={} → circonférence={}, aire={}",
                        format_nombre(r),
                        format_nombre(circ),
                        format_nombre(aire)
                    ),
                    Valeur::Couple(circ, aire),
                ))
            }
            (Calculatrice::Geometrie, "Parallélogramme") => {
                let a = param_f64(params, 0, "Côté a")?;
                let b = param_f64(params, 1, "Côté b")?;
                let h = param_f64(params, 2, "Hauteur h")?;
                let (perim, aire) = fonctions::parallelogramme(a, b, h)?;
                Ok((
                    format!(
                        "Géométrie parallélogramme : a={}, b={}, h={} → périmètre={}, aire={}",
                        format_nombre(a),
                        format_nombre(b),
                        format_nombre(h),
                        format_nombre(perim),
                        format_nombre(aire)
                    ),
                    Valeur::Couple(perim, aire),
                ))
            }

            (Calculatrice::Fonctions, "Factorielle") => {
                let n = param_i64(params, 0, "n")?;
                let f = fonctions::factorielle(n)?;
                Ok((format!("Factorielle : {n}! = {f}"), Valeur::Entier(f)))
            }
            (Calculatrice::Fonctions, "Racine carrée") => {
                let x = param_f64(params, 0, "x")?;
                let r = fonctions::racine_carree(x)?;
                Ok((
                    format!("Racine carrée : √{} = {}", format_nombre(x), format_nombre(r)),
                    Valeur::Nombre(r),
                ))
            }
            (Calculatrice::Fonctions, "Puissance") => {
                let base = param_f64(params, 0, "Base")?;
                let exposant = param_f64(params, 1, "Exposant")?;
                let r = fonctions::puissance(base, exposant)?;
                Ok((
                    format!(
                        "Puissance : {}^{} = {}",
                        format_nombre(base),
                        format_nombre(exposant),
                        format_nombre(r)
                    ),
                    Valeur::Nombre(r),
                ))
            }
            (Calculatrice::Fonctions, "Nombres premiers") => {
                let min = param_i64(params, 0, "Borne inférieure")?;
                let max = param_i64(params, 1, "Borne supérieure")?;
                let p = fonctions::nombres_premiers(min, max)?;
                let liste = p.iter().map(u64::to_string).collect::<Vec<_>>().join(", ");
                Ok((
                    format!("Nombres premiers entre {min} et {max} : {liste}"),
                    Valeur::Premiers(p),
                ))
            }
            (Calculatrice::Fonctions, "Décimal en fraction") => {
                let x = param_f64(params, 0, "Décimal")?;
                let f = fonctions::decimal_en_fraction(x)?;
                Ok((
                    format!("Fraction : {} = {}/{}", format_nombre(x), f.numer(), f.denom()),
                    Valeur::Fraction(f),
                ))
            }

            (c, autre) => Err(ErreurCalcul::CommandeInconnue(format!(
                "{autre} ({})",
                c.info().nom
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::erreurs::{ErreurExpression, ErreurTriangle};

    #[test]
    fn chaque_commande_annoncee_est_executable() {
        // aucune commande listée ne doit tomber sur CommandeInconnue
        for calc in Calculatrice::TOUTES {
            for cmd in calc.info().commandes {
                let r = calc.executer(cmd.nom, &[]);
                assert!(
                    !matches!(r, Err(ErreurCalcul::CommandeInconnue(_))),
                    "{} / {}",
                    calc.info().nom,
                    cmd.nom
                );
            }
        }
    }

    #[test]
    fn base_calcul() {
        let (txt, v) = Calculatrice::Base.executer("Calcul", &["2*3/4"]).unwrap();
        assert_eq!(txt, "NR: 2x3:4 = 1.5");
        assert_eq!(v, Valeur::Nombre(1.5));

        let (txt, _) = Calculatrice::Base.executer("Calcul", &["1/3"]).unwrap();
        assert_eq!(txt, "NR: 1:3 = 0.333333");
    }

    #[test]
    fn base_erreur_classee() {
        let e = Calculatrice::Base.executer("Calcul", &["1/0"]).unwrap_err();
        assert_eq!(e, ErreurCalcul::Expression(ErreurExpression::DivisionParZero));
    }

    #[test]
    fn triangle_par_parametres() {
        let (txt, v) = Calculatrice::Geometrie
            .executer("Triangle", &["SSS", "3", "4", "5", "", "", "", ""])
            .unwrap();
        assert!(txt.contains("Aire : 6"));
        assert!(v.texte().contains("C=90°"));

        let e = Calculatrice::Geometrie
            .executer("Triangle", &["ASA", "", "", "2", "60", "", "", ""])
            .unwrap_err();
        assert_eq!(
            e,
            ErreurCalcul::Triangle(ErreurTriangle::ParametreManquant("angle B"))
        );
    }

    #[test]
    fn triangle_methode_inconnue() {
        let e = Calculatrice::Geometrie
            .executer("Triangle", &["XYZ", "3", "4", "5"])
            .unwrap_err();
        assert!(matches!(e, ErreurCalcul::ParametreInvalide(_)));
    }

    #[test]
    fn fonctions_diverses() {
        let (txt, v) = Calculatrice::Fonctions.executer("Factorielle", &["5"]).unwrap();
        assert_eq!(txt, "Factorielle : 5! = 120");
        assert_eq!(v.texte(), "120");

        let (_, v) = Calculatrice::Fonctions
            .executer("Nombres premiers", &["10", "20"])
            .unwrap();
        assert_eq!(v.texte(), "[11, 13, 17, 19]");

        let (txt, _) = Calculatrice::Fonctions
            .executer("Décimal en fraction", &["0,75"])
            .unwrap();
        assert_eq!(txt, "Fraction : 0.75 = 3/4");

        let (_, v) = Calculatrice::Geometrie.executer("Cercle", &["2"]).unwrap();
        assert_eq!(v, Valeur::Couple(12.5664, 12.5664));
    }

    #[test]
    fn parametre_illisible() {
        let e = Calculatrice::Fonctions
            .executer("Factorielle", &["5.5"])
            .unwrap_err();
        assert!(matches!(e, ErreurCalcul::ParametreInvalide(_)));

        let e = Calculatrice::Fonctions.executer("Puissance", &["2"]).unwrap_err();
        assert!(matches!(e, ErreurCalcul::ParametreInvalide(_)));
    }

    #[test]
    fn commande_inconnue() {
        let e = Calculatrice::Base.executer("Crédit", &[]).unwrap_err();
        assert!(matches!(e, ErreurCalcul::CommandeInconnue(_)));
    }
}
