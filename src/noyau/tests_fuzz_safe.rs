//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur arithmétique sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - magnitudes bornées (coefficients, radicandes, exposants)
//! - budget temps global
//! - on accepte les erreurs attendues (radicaux incompatibles, division par zéro)
//! - invariant clé : chaque résultat est un triplet canonique cohérent

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurRadical;
use super::nombre::NombreRadical;

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurRadical) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz sur opérandes
    // valides, parce que le domaine est volontairement limité.
    matches!(
        e,
        ErreurRadical::RadicalIncompatible(_, _) | ErreurRadical::DivisionParZero
    )
}

fn sans_facteur_carre(v: &BigInt) -> bool {
    if v.is_zero() {
        return true;
    }
    let mut p = BigInt::from(2);
    while &p * &p <= *v {
        if (v % (&p * &p)).is_zero() {
            return false;
        }
        p += 1;
    }
    true
}

fn verifie_canonique(x: &NombreRadical) {
    assert!(sans_facteur_carre(x.radicande()), "radicande non réduit : {x}");
    if x.facteur().is_zero() {
        assert!(x.radicande().is_zero(), "facteur nul, radicande gardé : {x}");
    }
    let c = BigRational::from_integer(x.radicande().clone());
    let norme = x.ajout() * x.ajout() - x.facteur() * x.facteur() * c;
    assert_eq!(x.norme(), &norme, "norme incohérente : {x}");
}

/* ------------------------ Génération bornée ------------------------ */

fn gen_coeff(rng: &mut Rng) -> (i64, i64) {
    // numérateur dans [−9, 9], dénominateur dans [1, 6]
    let num = rng.pick(19) as i64 - 9;
    let den = rng.pick(6) as i64 + 1;
    (num, den)
}

fn gen_radicande(rng: &mut Rng) -> i64 {
    // petits radicandes, dont 0 (rationnel pur) et des non-réduits (8, 12, 18, 50)
    const CHOIX: [i64; 10] = [0, 1, 2, 3, 5, 6, 8, 12, 18, 50];
    CHOIX[rng.pick(CHOIX.len() as u32) as usize]
}

fn gen_nombre(rng: &mut Rng) -> NombreRadical {
    let a = gen_coeff(rng);
    let b = gen_coeff(rng);
    let c = gen_radicande(rng);
    NombreRadical::nouveau(a, b, c).unwrap_or_else(|e| panic!("génération : {e}"))
}

fn applique_op(
    rng: &mut Rng,
    x: &NombreRadical,
    y: &NombreRadical,
) -> Result<NombreRadical, ErreurRadical> {
    match rng.pick(6) {
        0 => x.somme(y),
        1 => x.difference(y),
        2 => x.produit(y),
        3 => x.quotient(y),
        4 => {
            // exposant borné [−3, 3]
            let n = rng.pick(7) as i64 - 3;
            x.puissance(n)
        }
        _ => Ok(x.absolu()),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_operations_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let x = gen_nombre(&mut rng);
        let y = gen_nombre(&mut rng);
        verifie_canonique(&x);
        verifie_canonique(&y);

        match applique_op(&mut rng, &x, &y) {
            Ok(z) => {
                verifie_canonique(&z);
                vus_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: x={x} y={y} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes valeurs => mêmes sorties.
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let x1 = gen_nombre(&mut r1);
        let x2 = gen_nombre(&mut r2);
        assert_eq!(x1, x2);
        assert_eq!(x1.format_joli(), x2.format_joli());
    }
}

#[test]
fn fuzz_safe_somme_et_oppose() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1_000);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let x = gen_nombre(&mut rng);
        let zero = x.somme(&-&x).unwrap();
        assert!(zero.est_rationnel());
        assert!(zero.ajout().is_zero());

        // |x| ≥ 0 et |−x| = |x|
        let abs = x.absolu();
        assert_ne!(abs.signe(), Ordering::Less);
        assert_eq!((-&x).absolu(), abs);
    }
}

#[test]
fn fuzz_safe_ordre_antisymetrique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let mut rng = Rng::new(0xD1CE_u64);
    let valeurs: Vec<NombreRadical> = (0..40).map(|_| gen_nombre(&mut rng)).collect();

    for x in &valeurs {
        for y in &valeurs {
            budget(t0, max);
            assert_eq!(x.cmp(y), y.cmp(x).reverse());
            assert_eq!(x.cmp(y) == Ordering::Equal, x == y);
        }
    }
}

#[test]
fn fuzz_safe_quotient_aller_retour() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let mut rng = Rng::new(0xACE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let x = gen_nombre(&mut rng);
        let y = gen_nombre(&mut rng);

        // (x·y)/y = x quand le produit et le quotient sont définis.
        let Ok(p) = x.produit(&y) else { continue };
        match p.quotient(&y) {
            Ok(retour) => assert_eq!(retour, x, "(x·y)/y ≠ x pour x={x} y={y}"),
            Err(e) => assert!(est_erreur_attendue(&e), "err={e}"),
        }
    }
}
