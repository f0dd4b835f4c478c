//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence (calculée en f64 à la génération)
//! - seule erreur attendue pour une expression bien formée : division par zéro

use std::time::{Duration, Instant};

use super::erreurs::ErreurExpression;
use super::eval::evaluer;
use super::triangle::resoudre_sss;

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
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Espaces aléatoires (la normalisation doit les effacer).
fn esp(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => " ",
        1 => "  ",
        _ => "",
    }
}

/// Littéral : entier ou décimal court, parfois à virgule.
fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(100);
    if rng.coin() {
        (entier.to_string(), entier as f64)
    } else {
        let dec = rng.pick(100);
        let txt = format!("{entier}.{dec:02}");
        let v: f64 = txt.parse().unwrap();
        if rng.pick(4) == 0 {
            (txt.replace('.', ","), v)
        } else {
            (txt, v)
        }
    }
}

/// Renvoie (texte, Some(valeur)) ou (texte, None) si une division par zéro doit survenir.
fn gen_expr(rng: &mut Rng, profondeur: u32) -> (String, Option<f64>) {
    if profondeur == 0 || rng.pick(3) == 0 {
        let (t, v) = gen_nombre(rng);
        return (t, Some(v));
    }

    let (ta, va) = gen_expr(rng, profondeur - 1);
    let (tb, vb) = gen_expr(rng, profondeur - 1);

    match rng.pick(6) {
        0 => (format!("({ta}{}+{}{tb})", esp(rng), esp(rng)), va.zip(vb).map(|(a, b)| a + b)),
        1 => (format!("({ta}{}-{}{tb})", esp(rng), esp(rng)), va.zip(vb).map(|(a, b)| a - b)),
        2 => {
            let op = if rng.coin() { "*" } else { "x" };
            (format!("({ta}{op}{tb})"), va.zip(vb).map(|(a, b)| a * b))
        }
        3 => {
            let op = if rng.coin() { "/" } else { ":" };
            let v = match (va, vb) {
                (Some(a), Some(b)) if b != 0.0 => Some(a / b),
                _ => None,
            };
            (format!("({ta}{op}{tb})"), v)
        }
        4 => {
            // moins unaire après opérateur
            (format!("({ta}*-{tb})"), va.zip(vb).map(|(a, b)| a * -b))
        }
        _ => {
            // moins en tête de sous-expression
            (format!("(-{ta}+{tb})"), va.zip(vb).map(|(a, b)| (0.0 - a) + b))
        }
    }
}

/* ------------------------ Fuzz : évaluateur ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0x5EED_CAFE);

    for _ in 0..2000 {
        let (txt, attendu) = gen_expr(&mut rng, 4);
        let obtenu = evaluer(&txt);

        match (attendu, obtenu) {
            (Some(a), Ok(v)) => {
                assert!(v.is_finite(), "expr={txt:?} v={v}");
                assert_eq!(v, a, "expr={txt:?}");
            }
            (None, Err(ErreurExpression::DivisionParZero)) => {}
            (a, o) => panic!("expr={txt:?} attendu={a:?} obtenu={o:?}"),
        }

        budget(t0, Duration::from_secs(5));
    }
}

#[test]
fn fuzz_chaines_quelconques_sans_panique() {
    const ALPHABET: &[u8] = b"0123456789.+-*/()eE x:,";
    let t0 = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..3000 {
        let n = rng.pick(24) as usize;
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
            .collect();

        // déterminisme : deux évaluations identiques
        let a = evaluer(&s).map(f64::to_bits);
        let b = evaluer(&s).map(f64::to_bits);
        assert_eq!(a, b, "s={s:?}");

        budget(t0, Duration::from_secs(5));
    }
}

#[test]
fn fuzz_parentheses_desequilibrees() {
    let mut rng = Rng::new(7);
    for _ in 0..500 {
        let (txt, _) = gen_expr(&mut rng, 3);
        if !txt.contains('(') {
            continue;
        }
        // une '(' de plus en tête : jamais refermée
        let s = format!("({txt}");
        assert_eq!(
            evaluer(&s),
            Err(ErreurExpression::ParenthesesDesequilibrees),
            "s={s:?}"
        );
    }
}

/* ------------------------ Fuzz : triangles ------------------------ */

#[test]
fn fuzz_triangles_valides() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0xDEC0DE);

    for _ in 0..2000 {
        let a = 0.5 + rng.unit() * 50.0;
        let b = 0.5 + rng.unit() * 50.0;
        let bas = (a - b).abs();
        let c = bas + (0.05 + 0.9 * rng.unit()) * (a + b - bas);

        let r = resoudre_sss(a, b, c).unwrap_or_else(|e| panic!("({a},{b},{c}) {e}"));
        let somme = r.angle_a + r.angle_b + r.angle_c;
        assert!((somme - 180.0).abs() < 1e-6, "({a},{b},{c}) somme={somme}");
        assert!(r.aire > 0.0);
        assert!(r.rayon_inscrit < r.rayon_circonscrit);

        budget(t0, Duration::from_secs(5));
    }
}
