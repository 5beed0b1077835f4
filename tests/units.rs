use tabula::units::*;

#[test]
fn imperial_and_metric() {
    let stride = 1_i64.yd() + 1_i64.ft();
    assert_eq!(stride.to::<Inch<i64>>().count(), 48);
    assert_eq!(stride, 4_i64.ft());

    // A mile is 160934 cm, just short of 1760 yards; integer conversion truncates.
    let run = 1_i64.mi() + 100_i64.yd();
    assert_eq!(run.to::<Yard<i64>>().count(), 1859);
    assert!(run > 1_i64.mi());
    let run = 1.0_f64.mi() + 100.0_f64.yd();
    assert!((run.to::<Yard<f64>>().count() - 1859.996).abs() < 1e-3);

    let board = 8_i64.ft() - 6_i64.inch();
    assert_eq!(board, 90_i64.inch());
    assert_eq!(board.to::<Centimeter<i64>>().count(), 228);
    assert_eq!(board.to::<Millimeter<i64>>().count(), 2286);

    let marathon = 42.195_f64.km();
    assert!((marathon.to::<Mile<f64>>().count() - 26.2188).abs() < 1e-3);
}

#[test]
fn angles() {
    let right = 90_i32.deg();
    assert_eq!(right, 5400_i32.amin());
    assert_eq!(right.to::<ArcSecond<i32>>().count(), 324_000);
    assert_eq!(1_i32.rnd(), 4_i32 * right);
    assert!((right.sin() - 1.0).abs() < 1e-9);
    assert!(right.cos().abs() < 1e-8);
    assert!((45.0_f64.deg().tan() - 1.0).abs() < 1e-8);

    let half_turn = std::f64::consts::PI.rad();
    assert!((half_turn.to::<Degree<f64>>().count() - 180.0).abs() < 1e-6);
    assert!(half_turn < 0.5_f64.rnd() + 1.0_f64.asec());
}

#[test]
fn mixed_ratio_arithmetic() {
    let mut total = 0_i64.m();
    total += 1_i64.km();
    total += 250_i64.cm();
    total -= 50_i64.dm();
    // 1000 m + 2 m (2.5 m truncated) - 5 m
    assert_eq!(total.count(), 997);

    let exact = 1_i64.km() + 250_i64.cm() - 50_i64.dm();
    assert_eq!(exact.count(), 99_750);
    assert_eq!(exact.to::<Meter<i64>>().count(), 997);

    assert_eq!((10_i64.m() % 3_i64.m()).count(), 1);
    assert_eq!((1_i64.m() % 30_i64.cm()).count(), 10);
}

#[test]
fn ratios() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(<Common<Frac<3048, 10000>, Frac<254, 10000>>>::NUM, 254);
    assert_eq!(<Common<Frac<1, 60>, Frac<1, 3600>>>::DEN, 3600);
    assert_eq!(<Frac<1000, 1>>::VALUE, 1000.0);
}
