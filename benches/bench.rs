use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use static_float::{Fixed, UBig, Vec3};

// Establish a baseline by comparing with a single fpu op

fn baseline_fpu_mul_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_mul_f64", |b| {
    b.iter(|| black_box(3.14) * black_box(69.420));
  });
}

fn baseline_fpu_normalize_f64(c: &mut Criterion) {
  let v = Vec3::new(3.14, -69.420, 0.5);
  c.bench_function("baseline_fpu_normalize_f64", |b| {
    b.iter(|| black_box(v).normalize());
  });
}

// Arithmetic

type A32 = Fixed<20, -10, i32>;
type B32 = Fixed<20, 0, i32>;

fn arith_32(c: &mut Criterion) {
  let x = A32::from_f64_unchecked(312.5371);
  let y = B32::from_f64_unchecked(-4177.);
  let mut g = c.benchmark_group("arith_32");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| {
    b.iter(|| -> Fixed<31, -10, i32> { black_box(&x).add(black_box(&y)) });
  });
  g.bench_function("mul", |b| {
    b.iter(|| -> Fixed<40, -10, i64> { black_box(&x).mul(black_box(&y)) });
  });
  g.bench_function("div", |b| {
    b.iter(|| -> Fixed<40, -30, i64> { black_box(&x).div(black_box(&y)) });
  });
  g.finish();
}

// Inverse square root, on i128 and on the arbitrary-precision carrier

fn inverse_sqrt_22(c: &mut Criterion) {
  let mut g = c.benchmark_group("inverse_sqrt_22");
  for x in [1., 2., 1000., 4194303.] {
    let x = Fixed::<22, 0, u32>::from_f64_unchecked(x);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("i128", x.to_f64()), &x, |b, x| {
      b.iter(|| -> Fixed<33, -33, u64> { black_box(x).inverse_sqrt() });
    });
    g.bench_with_input(BenchmarkId::new("big", x.to_f64()), &x, |b, x| {
      b.iter(|| -> Fixed<33, -33, u64> { black_box(x).bench_inverse_sqrt_kernel() });
    });
  }
  g.finish();
}

fn inverse_sqrt_100(c: &mut Criterion) {
  let mut g = c.benchmark_group("inverse_sqrt_100");
  for x in [2f64.powi(-50), 1., 3.5e14] {
    let x = Fixed::<100, -50, u128>::from_f64_unchecked(x);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(x.to_f64()), &x, |b, x| {
      b.iter(|| -> Fixed<150, -125, UBig> { black_box(x).inverse_sqrt() });
    });
  }
  g.finish();
}

// Normalisation

fn normalize_15(c: &mut Criterion) {
  let v = Vec3::new(1., -200., 16383.).map(Fixed::<15, 0, i16>::from_f64_unchecked);
  let mut g = c.benchmark_group("normalize_15");
  g.throughput(Throughput::Elements(1));
  g.bench_function("bisection", |b| {
    b.iter(|| -> Vec3<Fixed<15, -14, i16>> { black_box(&v).normalize() });
  });
  g.bench_function("bisection_big", |b| {
    b.iter(|| -> Vec3<Fixed<15, -14, i16>> { black_box(&v).bench_normalize_kernel() });
  });
  g.finish();
}

fn normalize_10(c: &mut Criterion) {
  let v = Vec3::new(0.125, 3., -127.5).map(Fixed::<10, -3, i16>::from_f64_unchecked);
  let mut g = c.benchmark_group("normalize_10");
  g.throughput(Throughput::Elements(1));
  g.bench_function("bisection", |b| {
    b.iter(|| -> Vec3<Fixed<10, -9, i16>> { black_box(&v).normalize() });
  });
  g.bench_function("inverse_sqrt", |b| {
    b.iter(|| -> Vec3<Fixed<10, -9, i16>> { black_box(&v).normalize_inverse_sqrt() });
  });
  g.bench_function("inverse_sqrt_big", |b| {
    b.iter(|| -> Vec3<Fixed<10, -9, i16>> { black_box(&v).bench_normalize_inverse_sqrt_kernel() });
  });
  g.finish();
}

criterion_group!(baseline_fpu,
  baseline_fpu_mul_f64,
  baseline_fpu_normalize_f64,
);

criterion_group!(arith,
  arith_32,
);

criterion_group!(inverse_sqrt,
  inverse_sqrt_22,
  inverse_sqrt_100,
);

criterion_group!(normalize,
  normalize_15,
  normalize_10,
);

criterion_main!(baseline_fpu, arith, inverse_sqrt, normalize);
