//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés du noyau sans faire chauffer la machine.
//! - évaluation : résultats identiques à l’arithmétique f64 directe (même ordre d’opérations)
//! - triangles : somme des angles, périmètre exact, aller-retour SAS -> SSS
//! - stress : profondeur de parenthèses bornée + budget temps global

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::arrondi::arrondi6;
use super::erreurs::{ErreurExpression, ErreurTriangle};
use super::eval::evaluer;
use super::triangle::{resoudre, resoudre_sss, EntreeTriangle, MethodeTriangle, SolutionTriangle};

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluation : cohérence f64 ------------------------ */

#[test]
fn sci_meme_resultat_que_f64() {
    assert_eq!(eval_ok("0.1+0.2"), 0.1 + 0.2);
    assert_eq!(eval_ok("1.5*2.25-0.75/3"), 1.5 * 2.25 - 0.75 / 3.0);
    assert_eq!(eval_ok("7/3*3"), 7.0 / 3.0 * 3.0);
    assert_eq!(eval_ok("1-2-3-4"), ((1.0 - 2.0) - 3.0) - 4.0);
    assert_eq!(eval_ok("2*(0.1+0.7)/-0.3"), 2.0 * (0.1 + 0.7) / -0.3);
}

#[test]
fn sci_exemples_de_reference() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok(""), 0.0);
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("3*-2"), -6.0);
    assert_eq!(evaluer("10/0"), Err(ErreurExpression::DivisionParZero));
    assert_eq!(
        evaluer("2+(3*4"),
        Err(ErreurExpression::ParenthesesDesequilibrees)
    );
}

#[test]
fn sci_arrondi_affichage() {
    // l’évaluateur ne coupe rien : c’est l’appelant qui arrondit
    let v = eval_ok("1/3");
    assert_ne!(v, 0.333333);
    assert_eq!(arrondi6(v), 0.333333);
}

/* ------------------------ Triangles : invariants ------------------------ */

#[test]
fn sci_triangles_connus() {
    for (a, b, c) in [
        (3.0, 4.0, 5.0),
        (1.0, 1.0, 1.0),
        (2.0, 3.0, 4.0),
        (10.0, 10.0, 19.9),
        (0.001, 0.001, 0.0015),
        (1e4, 2e4, 2.5e4),
    ] {
        let r = resoudre_sss(a, b, c).unwrap();
        let somme = r.angle_a + r.angle_b + r.angle_c;
        assert!((somme - 180.0).abs() < 1e-6, "({a},{b},{c}) somme={somme}");
        assert_eq!(r.perimetre, a + b + c);
        for angle in [r.angle_a, r.angle_b, r.angle_c] {
            assert!(angle > 0.0 && angle < 180.0);
        }
    }
}

#[test]
fn sci_inegalite_triangulaire() {
    for (a, b, c) in [(1.0, 1.0, 3.0), (5.0, 1.0, 1.0), (1.0, 7.0, 2.0), (0.0, 1.0, 1.0)] {
        assert!(matches!(
            resoudre_sss(a, b, c),
            Err(ErreurTriangle::TriangleInvalide(_))
        ));
    }
}

#[test]
fn sci_aller_retour_sas_sss() {
    for (a, b, gamma) in [(5.0, 7.0, 40.0), (3.0, 3.0, 120.0), (12.5, 8.0, 75.0), (2.0, 9.0, 95.5)] {
        let sas = EntreeTriangle {
            a: Some(a),
            b: Some(b),
            angle_c: Some(gamma),
            ..Default::default()
        };
        let SolutionTriangle::Complete(r1) = resoudre(MethodeTriangle::Sas, &sas).unwrap() else {
            panic!("SAS doit donner un triangle complet");
        };

        let sss = EntreeTriangle {
            a: Some(r1.a),
            b: Some(r1.b),
            c: Some(r1.c),
            ..Default::default()
        };
        let SolutionTriangle::Complete(r2) = resoudre(MethodeTriangle::Sss, &sss).unwrap() else {
            panic!("SSS doit donner un triangle complet");
        };

        // c est arrondi à 6 chiffres entre les deux passes : écart relatif ~1e-5 au plus
        assert!(
            ((r2.angle_c - gamma) / gamma).abs() < 1e-5,
            "γ={gamma} retrouvé={}",
            r2.angle_c
        );
    }
}

#[test]
fn sci_asa_somme_180() {
    let e = EntreeTriangle {
        angle_a: Some(35.0),
        c: Some(4.2),
        angle_b: Some(75.0),
        ..Default::default()
    };
    let SolutionTriangle::Complete(r) = resoudre(MethodeTriangle::Asa, &e).unwrap() else {
        panic!("ASA doit donner un triangle complet");
    };
    assert_eq!(r.angle_a, 35.0);
    assert_eq!(r.angle_b, 75.0);
    assert_eq!(r.angle_c, 70.0);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    for profondeur in [1usize, 10, 100, 500] {
        let s = format!("{}1+1{}", "(".repeat(profondeur), ")".repeat(profondeur));
        assert_eq!(eval_ok(&s), 2.0);
        budget(t0, Duration::from_secs(2));
    }
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let s = vec!["1"; 5000].join("+");
    assert_eq!(eval_ok(&s), 5000.0);
    budget(t0, Duration::from_secs(2));
}

/* ------------------------ Propriétés (proptest) ------------------------ */

proptest! {
    #[test]
    fn prop_evaluation_idempotente(s in "[0-9.+*/()eE -]{0,40}") {
        let a = evaluer(&s).map(f64::to_bits);
        let b = evaluer(&s).map(f64::to_bits);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_somme_des_angles(a in 1.0f64..100.0, b in 1.0f64..100.0, t in 0.1f64..0.9) {
        let bas = (a - b).abs();
        let c = bas + t * (a + b - bas);
        let r = resoudre_sss(a, b, c).unwrap();
        prop_assert!((r.angle_a + r.angle_b + r.angle_c - 180.0).abs() < 1e-6);
        prop_assert_eq!(r.perimetre, a + b + c);
    }
}
