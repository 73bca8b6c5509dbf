//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences d’actions bornées
//! - budget temps global
//! - invariants clés vérifiés après CHAQUE action :
//!   * sentinelle affichée => expression et libellé vides
//!   * jamais deux opérateurs binaires collés (hors "**")
//!   * juste évalué => l’expression est un nombre relisible

use std::time::{Duration, Instant};

use super::action::Action;
use super::eval::eval_expression;
use super::jetons::{tokenize, Tok};
use super::moteur::{Moteur, Rendu};

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

/* ------------------------ Génération d’actions ------------------------ */

fn gen_action(rng: &mut Rng) -> Action {
    // chiffres sur-représentés : sinon presque rien n’est évaluable
    match rng.pick(24) {
        0..=9 => Action::Caractere(char::from(b'0' + rng.pick(10) as u8)),
        10 => Action::Caractere('.'),
        11 => Action::Caractere('+'),
        12 => Action::Caractere('-'),
        13 => Action::Caractere('*'),
        14 => Action::Caractere('/'),
        15 => Action::Caractere('%'),
        16 => Action::Parenthese,
        17 => Action::Puissance,
        18 => match rng.pick(6) {
            0 => Action::Sin,
            1 => Action::Cos,
            2 => Action::Tan,
            3 => Action::Log,
            4 => Action::Ln,
            _ => Action::Racine,
        },
        19 => {
            if rng.pick(2) == 0 {
                Action::Pi
            } else {
                Action::E
            }
        }
        20 => Action::Retour,
        21 => Action::Effacer,
        _ => Action::Egal,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(m: &Moteur, r: &Rendu) {
    let expr = m.expr();

    if r.affichage == m.reglages().sentinelle_erreur {
        assert!(expr.is_empty(), "sentinelle mais expr={expr:?}");
        assert!(r.libelle.is_empty(), "sentinelle mais libellé={:?}", r.libelle);
    } else {
        assert_eq!(r.affichage, expr);
    }

    let sans_puissance = expr.replace("**", "^");
    let ops = |c: char| matches!(c, '+' | '-' | '*' | '/' | '^');
    let chars: Vec<char> = sans_puissance.chars().collect();
    for w in chars.windows(2) {
        assert!(
            !(ops(w[0]) && ops(w[1])),
            "opérateurs collés dans {expr:?}"
        );
    }

    if m.juste_evalue() {
        let jetons = tokenize(expr).unwrap_or_else(|e| panic!("résultat illisible {expr:?}: {e}"));
        let nombre = matches!(jetons.as_slice(), [Tok::Num(_)])
            || matches!(jetons.as_slice(), [Tok::Minus, Tok::Num(_)]);
        assert!(nombre, "résultat non numérique: {expr:?}");
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 => format!("{}", rng.pick(100)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        _ => format!("{}%", rng.pick(200)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(9) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a}**{})", gen_atom(rng)),
        6 => format!("sin({a})"),
        7 => format!("sqrt({a})"),
        _ => format!("-{a}"),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_actions_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_resultat = 0usize;
    let mut vu_erreur = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::default();
        for _ in 0..40 {
            let r = m.appliquer(gen_action(&mut rng));
            check_invariants(&m, &r);

            if m.juste_evalue() {
                vu_resultat += 1;
            }
            if r.affichage == "Error" {
                vu_erreur += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_resultat > 10, "trop peu de résultats: {vu_resultat}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);

    let mut a = Moteur::default();
    let mut b = Moteur::default();

    for _ in 0..500 {
        let ra = a.appliquer(gen_action(&mut rng_a));
        let rb = b.appliquer(gen_action(&mut rng_b));
        assert_eq!(ra, rb);
    }
}

#[test]
fn fuzz_safe_expressions_resultat_fini() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let normalise = super::normalise::normaliser(&expr)
            .unwrap_or_else(|e| panic!("normalisation {expr:?}: {e}"));

        // Toute expression générée est bien formée : seul un résultat non fini peut échouer.
        match eval_expression(&normalise) {
            Ok(v) => assert!(v.is_finite(), "expr={expr:?} v={v}"),
            Err(e) => assert_eq!(
                e,
                super::erreur::ErreurCalc::NonFini,
                "erreur non attendue: expr={expr:?}"
            ),
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 800.0);
}
