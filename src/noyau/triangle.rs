// src/noyau/triangle.rs
//
// Résolution de triangles
// -----------------------
// Méthodes : SSS, SAS, ASA, SSA, base + hauteur.
// Tout (sauf base + hauteur) est ramené au cas SSS, qui calcule :
// périmètre, aire (Héron), angles (loi des cosinus), hauteurs, rayons inscrit/circonscrit.
//
// Conventions : côté a opposé à l’angle A, etc. Angles en degrés.
//
// NOTE (SSA) : traité exactement comme SAS (angle C entre a et b).
// Un vrai SSA peut avoir 0, 1 ou 2 solutions ; ce cas n’est pas détecté.

use std::str::FromStr;

use log::debug;

use super::arrondi::arrondi6;
use super::erreurs::{ErreurCalcul, ErreurTriangle};
use super::format::format_nombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodeTriangle {
    Sss,
    Sas,
    Asa,
    Ssa,
    BaseHauteur,
}

impl MethodeTriangle {
    pub const TOUTES: [MethodeTriangle; 5] = [
        MethodeTriangle::Sss,
        MethodeTriangle::Sas,
        MethodeTriangle::Asa,
        MethodeTriangle::Ssa,
        MethodeTriangle::BaseHauteur,
    ];

    /// Étiquette courte (utilisée comme paramètre texte).
    pub fn etiquette(self) -> &'static str {
        match self {
            MethodeTriangle::Sss => "SSS",
            MethodeTriangle::Sas => "SAS",
            MethodeTriangle::Asa => "ASA",
            MethodeTriangle::Ssa => "SSA",
            MethodeTriangle::BaseHauteur => "BH",
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            MethodeTriangle::Sss => "SSS (trois côtés)",
            MethodeTriangle::Sas => "SAS (deux côtés, angle inclus)",
            MethodeTriangle::Asa => "ASA (deux angles, côté inclus)",
            MethodeTriangle::Ssa => "SSA (deux côtés, angle opposé)",
            MethodeTriangle::BaseHauteur => "Base et hauteur",
        }
    }

    /// Champs à remplir (noms de EntreeTriangle::depuis_champs).
    pub fn champs_requis(self) -> &'static [&'static str] {
        match self {
            MethodeTriangle::Sss => &["a", "b", "c"],
            MethodeTriangle::Sas | MethodeTriangle::Ssa => &["a", "b", "angle_c"],
            MethodeTriangle::Asa => &["angle_a", "c", "angle_b"],
            MethodeTriangle::BaseHauteur => &["a", "hauteur"],
        }
    }
}

impl FromStr for MethodeTriangle {
    type Err = ErreurCalcul;

    /// Accepte l’étiquette (insensible à la casse) ou le libellé complet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        MethodeTriangle::TOUTES
            .into_iter()
            .find(|m| m.etiquette().eq_ignore_ascii_case(t) || m.libelle() == t)
            .ok_or_else(|| ErreurCalcul::ParametreInvalide(format!("méthode inconnue: {t}")))
    }
}

/// Entrées éparses : seuls les champs requis par la méthode doivent être présents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntreeTriangle {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub angle_a: Option<f64>,
    pub angle_b: Option<f64>,
    pub angle_c: Option<f64>,
    pub hauteur: Option<f64>,
}

/// Champ texte -> valeur ; vide ou illisible = absent.
fn lire_champ(s: &str) -> Option<f64> {
    let t = s.trim().replace(',', ".");
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl EntreeTriangle {
    /// Construit l’entrée depuis des paires (nom de champ, texte brut).
    ///
    /// Noms reconnus : a, b, c, angle_a, angle_b, angle_c, hauteur (alias h).
    /// Les noms inconnus sont ignorés.
    pub fn depuis_champs<'a, I>(champs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut e = EntreeTriangle::default();
        for (nom, brut) in champs {
            let v = lire_champ(brut);
            match nom {
                "a" => e.a = v,
                "b" => e.b = v,
                "c" => e.c = v,
                "angle_a" => e.angle_a = v,
                "angle_b" => e.angle_b = v,
                "angle_c" => e.angle_c = v,
                "hauteur" | "h" => e.hauteur = v,
                _ => {}
            }
        }
        e
    }
}

/// Triangle complet (après passage par SSS).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultatTriangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    pub hauteur_a: f64,
    pub hauteur_b: f64,
    pub hauteur_c: f64,
    pub aire: f64,
    pub perimetre: f64,
    pub rayon_inscrit: f64,
    pub rayon_circonscrit: f64,
}

impl ResultatTriangle {
    /// Chaque champ arrondi indépendamment à 6 chiffres significatifs.
    pub fn arrondi(&self) -> Self {
        Self {
            a: arrondi6(self.a),
            b: arrondi6(self.b),
            c: arrondi6(self.c),
            angle_a: arrondi6(self.angle_a),
            angle_b: arrondi6(self.angle_b),
            angle_c: arrondi6(self.angle_c),
            hauteur_a: arrondi6(self.hauteur_a),
            hauteur_b: arrondi6(self.hauteur_b),
            hauteur_c: arrondi6(self.hauteur_c),
            aire: arrondi6(self.aire),
            perimetre: arrondi6(self.perimetre),
            rayon_inscrit: arrondi6(self.rayon_inscrit),
            rayon_circonscrit: arrondi6(self.rayon_circonscrit),
        }
    }

    fn champs(&self) -> [f64; 13] {
        [
            self.a,
            self.b,
            self.c,
            self.angle_a,
            self.angle_b,
            self.angle_c,
            self.hauteur_a,
            self.hauteur_b,
            self.hauteur_c,
            self.aire,
            self.perimetre,
            self.rayon_inscrit,
            self.rayon_circonscrit,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolutionTriangle {
    Complete(ResultatTriangle),
    /// Base + hauteur : seule l’aire est déterminable.
    AireSeule { base: f64, hauteur: f64, aire: f64 },
}

impl SolutionTriangle {
    /// Texte multi-lignes pour l’UI et le journal.
    pub fn texte(&self) -> String {
        let f = format_nombre;
        match self {
            SolutionTriangle::Complete(r) => [
                format!("Triangle a={}, b={}, c={} :", f(r.a), f(r.b), f(r.c)),
                format!("Périmètre : {}", f(r.perimetre)),
                format!("Aire : {}", f(r.aire)),
                format!("Angle A : {}°", f(r.angle_a)),
                format!("Angle B : {}°", f(r.angle_b)),
                format!("Angle C : {}°", f(r.angle_c)),
                format!("Hauteur ha : {}", f(r.hauteur_a)),
                format!("Hauteur hb : {}", f(r.hauteur_b)),
                format!("Hauteur hc : {}", f(r.hauteur_c)),
                format!("Rayon inscrit : {}", f(r.rayon_inscrit)),
                format!("Rayon circonscrit : {}", f(r.rayon_circonscrit)),
            ]
            .join("\n"),
            SolutionTriangle::AireSeule {
                base,
                hauteur,
                aire,
            } => [
                format!("Triangle base={}, hauteur={} :", f(*base), f(*hauteur)),
                format!("Aire : {}", f(*aire)),
                "Note : les autres valeurs ne sont pas déterminables de façon unique.".to_string(),
            ]
            .join("\n"),
        }
    }

    /// Aire (disponible pour toutes les méthodes).
    pub fn aire(&self) -> f64 {
        match self {
            SolutionTriangle::Complete(r) => r.aire,
            SolutionTriangle::AireSeule { aire, .. } => *aire,
        }
    }
}

/* ------------------------ Validation ------------------------ */

fn invalide(msg: &str) -> ErreurTriangle {
    ErreurTriangle::TriangleInvalide(msg.to_string())
}

fn requis(v: Option<f64>, nom: &'static str) -> Result<f64, ErreurTriangle> {
    v.ok_or(ErreurTriangle::ParametreManquant(nom))
}

fn angle_valide(deg: f64) -> Result<(), ErreurTriangle> {
    if deg <= 0.0 || deg >= 180.0 {
        return Err(invalide("un angle doit être strictement entre 0° et 180°"));
    }
    Ok(())
}

/// cos -> angle en degrés (cosinus borné à [-1, 1] contre le bruit flottant).
fn angle_depuis_cos(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/* ------------------------ Résolutions ------------------------ */

/// SSS brut (sans arrondi) : toutes les autres méthodes finissent ici.
pub fn resoudre_sss(a: f64, b: f64, c: f64) -> Result<ResultatTriangle, ErreurTriangle> {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(invalide("tous les côtés doivent être positifs"));
    }
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(invalide(
            "la somme de deux côtés doit dépasser le troisième (inégalité triangulaire)",
        ));
    }

    // Calculs sur les côtés ramenés à max = 1 : ni a² ni le produit de Héron
    // ne sortent de la plage des f64 (1e-170 ou 1e200 restent solubles).
    let k = a.max(b).max(c);
    let (x, y, z) = (a / k, b / k, c / k);
    let s_n = (x + y + z) / 2.0;

    // Héron (normalisé)
    let aire_n = (s_n * (s_n - x) * (s_n - y) * (s_n - z)).sqrt();

    // Loi des cosinus (sans dimension)
    let angle_a = angle_depuis_cos((y * y + z * z - x * x) / (2.0 * y * z));
    let angle_b = angle_depuis_cos((x * x + z * z - y * y) / (2.0 * x * z));
    let angle_c = angle_depuis_cos((x * x + y * y - z * z) / (2.0 * x * y));

    let r = ResultatTriangle {
        a,
        b,
        c,
        angle_a,
        angle_b,
        angle_c,
        hauteur_a: 2.0 * aire_n / x * k,
        hauteur_b: 2.0 * aire_n / y * k,
        hauteur_c: 2.0 * aire_n / z * k,
        aire: aire_n * k * k,
        perimetre: a + b + c,
        rayon_inscrit: aire_n / s_n * k,
        rayon_circonscrit: (x * y * z) / (4.0 * aire_n) * k,
    };

    if !r.champs().iter().all(|v| v.is_finite()) {
        return Err(invalide("dimensions hors de la plage représentable"));
    }
    Ok(r)
}

/// SAS : a, b et l’angle C compris entre eux -> c par la loi des cosinus.
fn resoudre_sas(a: f64, b: f64, gamma: f64) -> Result<ResultatTriangle, ErreurTriangle> {
    if a <= 0.0 || b <= 0.0 {
        return Err(invalide("tous les côtés doivent être positifs"));
    }
    angle_valide(gamma)?;

    let k = a.max(b);
    let (x, y) = (a / k, b / k);
    let c = (x * x + y * y - 2.0 * x * y * gamma.to_radians().cos()).sqrt() * k;
    resoudre_sss(a, b, c)
}

/// ASA : angles A et B, côté c entre eux -> a, b par la loi des sinus.
fn resoudre_asa(alpha: f64, c: f64, beta: f64) -> Result<ResultatTriangle, ErreurTriangle> {
    if c <= 0.0 {
        return Err(invalide("le côté doit être positif"));
    }
    angle_valide(alpha)?;
    angle_valide(beta)?;

    let gamma = 180.0 - alpha - beta;
    if gamma <= 0.0 {
        return Err(invalide("la somme des deux angles doit rester sous 180°"));
    }

    let sin_gamma = gamma.to_radians().sin();
    let a = c * alpha.to_radians().sin() / sin_gamma;
    let b = c * beta.to_radians().sin() / sin_gamma;
    resoudre_sss(a, b, c)
}

/// Résout un triangle selon la méthode ; résultat arrondi à 6 chiffres significatifs.
pub fn resoudre(
    methode: MethodeTriangle,
    e: &EntreeTriangle,
) -> Result<SolutionTriangle, ErreurTriangle> {
    let brut = match methode {
        MethodeTriangle::Sss => {
            let a = requis(e.a, "côté a")?;
            let b = requis(e.b, "côté b")?;
            let c = requis(e.c, "côté c")?;
            resoudre_sss(a, b, c)?
        }
        MethodeTriangle::Sas | MethodeTriangle::Ssa => {
            let a = requis(e.a, "côté a")?;
            let b = requis(e.b, "côté b")?;
            let gamma = requis(e.angle_c, "angle C")?;
            resoudre_sas(a, b, gamma)?
        }
        MethodeTriangle::Asa => {
            let alpha = requis(e.angle_a, "angle A")?;
            let c = requis(e.c, "côté c")?;
            let beta = requis(e.angle_b, "angle B")?;
            resoudre_asa(alpha, c, beta)?
        }
        MethodeTriangle::BaseHauteur => {
            let base = requis(e.a, "côté a (base)")?;
            let hauteur = requis(e.hauteur, "hauteur")?;
            if base <= 0.0 || hauteur <= 0.0 {
                return Err(invalide("la base et la hauteur doivent être positives"));
            }
            return Ok(SolutionTriangle::AireSeule {
                base: arrondi6(base),
                hauteur: arrondi6(hauteur),
                aire: arrondi6(0.5 * base * hauteur),
            });
        }
    };

    debug!(
        "triangle {} -> a={} b={} c={}",
        methode.etiquette(),
        brut.a,
        brut.b,
        brut.c
    );
    Ok(SolutionTriangle::Complete(brut.arrondi()))
}

/// Point d’entrée exposé aux collaborateurs : champs texte bruts.
pub fn solve_triangle<'a, I>(
    methode: MethodeTriangle,
    champs: I,
) -> Result<SolutionTriangle, ErreurCalcul>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let e = EntreeTriangle::depuis_champs(champs);
    Ok(resoudre(methode, &e)?)
}
