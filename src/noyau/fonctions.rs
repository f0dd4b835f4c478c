// src/noyau/fonctions.rs
//
// Fonctions mathématiques “à la demande” (théorie des nombres + formes simples)
// ---------------------------------------------------------------------------
// - factorielle exacte (BigUint)
// - racine carrée (Newton), puissance
// - nombres premiers dans un intervalle
// - décimal -> fraction (table usuelle puis fractions continues)
// - cercle, parallélogramme

use num_bigint::BigUint;
use num_rational::Rational64;
use num_traits::One;

use super::arrondi::arrondi6;
use super::erreurs::ErreurCalcul;

/// Borne héritée de la version flottante (171! déborde un f64).
pub const FACTORIELLE_MAX: i64 = 170;

/// Garde-fou : taille maximale d’un intervalle de recherche de nombres premiers.
pub const PLAGE_PREMIERS_MAX: u64 = 1_000_000;

/// Dénominateur maximal pour l’approximation par fractions continues.
pub const DENOMINATEUR_MAX: i64 = 1_000_000;

const EPSILON_NEWTON: f64 = 1e-10;
const ITERATIONS_NEWTON_MAX: usize = 1000;

fn argument(msg: impl Into<String>) -> ErreurCalcul {
    ErreurCalcul::ArgumentInvalide(msg.into())
}

/* ------------------------ Factorielle ------------------------ */

pub fn factorielle(n: i64) -> Result<BigUint, ErreurCalcul> {
    if n < 0 {
        return Err(argument("la factorielle n’est définie que pour n ≥ 0"));
    }
    if n > FACTORIELLE_MAX {
        return Err(argument(format!("n doit rester ≤ {FACTORIELLE_MAX}")));
    }

    let mut acc = BigUint::one();
    for i in 2..=n as u64 {
        acc *= i;
    }
    Ok(acc)
}

/* ------------------------ Racine / puissance ------------------------ */

/// Racine carrée par Newton-Raphson (départ y = x), arrondie à 6 chiffres.
pub fn racine_carree(x: f64) -> Result<f64, ErreurCalcul> {
    if x < 0.0 {
        return Err(argument("la racine carrée n’est définie que pour x ≥ 0"));
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if !x.is_finite() {
        return Err(argument("x doit être fini"));
    }

    let mut y = x;
    for _ in 0..ITERATIONS_NEWTON_MAX {
        let y_next = 0.5 * (y + x / y);
        if (y - y_next).abs() < EPSILON_NEWTON {
            return Ok(arrondi6(y_next));
        }
        y = y_next;
    }
    // oscillation entre deux flottants voisins : y est déjà au plus près
    Ok(arrondi6(y))
}

/// base^exposant, arrondi à 6 chiffres.
pub fn puissance(base: f64, exposant: f64) -> Result<f64, ErreurCalcul> {
    if base == 0.0 && exposant <= 0.0 {
        return Err(argument("0 à une puissance nulle ou négative n’est pas défini"));
    }

    let v = if exposant.fract() == 0.0 && exposant.abs() <= i32::MAX as f64 {
        base.powi(exposant as i32)
    } else {
        if base < 0.0 {
            return Err(argument("base négative avec exposant non entier"));
        }
        (exposant * base.ln()).exp()
    };
    Ok(arrondi6(v))
}

/* ------------------------ Nombres premiers ------------------------ */

/// Test 6k ± 1.
pub fn est_premier(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: u64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Tous les nombres premiers de [min, max].
pub fn nombres_premiers(min: i64, max: i64) -> Result<Vec<u64>, ErreurCalcul> {
    if min < 0 || max < 0 {
        return Err(argument("les bornes doivent être positives"));
    }
    if min > max {
        return Err(argument("la borne inférieure doit être ≤ la borne supérieure"));
    }
    let (min, max) = (min as u64, max as u64);
    if max - min > PLAGE_PREMIERS_MAX {
        return Err(argument(format!(
            "intervalle trop grand (max {PLAGE_PREMIERS_MAX})"
        )));
    }

    Ok((min.max(2)..=max).filter(|n| est_premier(*n)).collect())
}

/* ------------------------ Décimal -> fraction ------------------------ */

/// Fractions usuelles reconnues sur la partie décimale (tolérance 1e-6).
/// 0.33 et 0.333 valent volontairement 1/3.
const FRACTIONS_USUELLES: [(f64, i64, i64); 23] = [
    (0.25, 1, 4),
    (0.33, 1, 3),
    (0.333, 1, 3),
    (0.5, 1, 2),
    (0.75, 3, 4),
    (0.2, 1, 5),
    (0.4, 2, 5),
    (0.6, 3, 5),
    (0.8, 4, 5),
    (0.125, 1, 8),
    (0.375, 3, 8),
    (0.625, 5, 8),
    (0.875, 7, 8),
    (0.33333333, 1, 3),
    (0.66666667, 2, 3),
    (0.16666667, 1, 6),
    (0.83333333, 5, 6),
    (0.11111111, 1, 9),
    (0.22222222, 2, 9),
    (0.44444444, 4, 9),
    (0.55555556, 5, 9),
    (0.77777778, 7, 9),
    (0.88888889, 8, 9),
];

pub fn decimal_en_fraction(x: f64) -> Result<Rational64, ErreurCalcul> {
    if !x.is_finite() {
        return Err(argument("décimal non fini"));
    }
    if x.abs() >= (i64::MAX / 2) as f64 {
        return Err(argument("décimal trop grand"));
    }

    let signe: i64 = if x < 0.0 { -1 } else { 1 };
    let x = x.abs();
    let entier = x.trunc();
    let decimale = x - entier;
    let entier = entier as i64;

    if decimale == 0.0 {
        return Ok(Rational64::from_integer(signe * entier));
    }

    if let Some((_, z, n)) = FRACTIONS_USUELLES
        .iter()
        .find(|(v, _, _)| (decimale - v).abs() < 1e-6)
    {
        return Ok(Rational64::new(signe * (entier * n + z), *n));
    }

    // Fractions continues : réduites h/k successives
    let (mut h1, mut h2, mut k1, mut k2) = (1i64, 0i64, 0i64, 1i64);
    let mut b = x;
    loop {
        let a = b.floor();
        if a >= i64::MAX as f64 {
            break;
        }
        let a = a as i64;

        let h = a.checked_mul(h1).and_then(|v| v.checked_add(h2));
        let k = a.checked_mul(k1).and_then(|v| v.checked_add(k2));
        let (Some(h), Some(k)) = (h, k) else {
            break;
        };
        if k > DENOMINATEUR_MAX {
            break;
        }

        (h2, h1) = (h1, h);
        (k2, k1) = (k1, k);

        let reste = b - a as f64;
        if reste == 0.0 || (x - h1 as f64 / k1 as f64).abs() < 1e-10 {
            break;
        }
        b = 1.0 / reste;
    }

    // k1 >= 1 : la première réduite (partie entière) passe toujours
    Ok(Rational64::new(signe * h1, k1))
}

/* ------------------------ Formes simples ------------------------ */

/// Cercle : (circonférence, aire).
pub fn cercle(rayon: f64) -> Result<(f64, f64), ErreurCalcul> {
    if rayon <= 0.0 {
        return Err(argument("le rayon doit être positif"));
    }
    let pi = std::f64::consts::PI;
    Ok((arrondi6(2.0 * pi * rayon), arrondi6(pi * rayon * rayon)))
}

/// Parallélogramme : (périmètre, aire).
pub fn parallelogramme(a: f64, b: f64, h: f64) -> Result<(f64, f64), ErreurCalcul> {
    if a <= 0.0 || b <= 0.0 || h <= 0.0 {
        return Err(argument("toutes les valeurs doivent être positives"));
    }
    if h > a && h > b {
        return Err(argument("la hauteur ne peut pas dépasser les deux côtés"));
    }
    Ok((arrondi6(2.0 * (a + b)), arrondi6(a * h)))
}
