use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonevalidator::PhoneNumberValidator;

use phonenumber::{
    self as rlp,
    country::Id::{self, AT, BR, CA, CN, GB, JP, US},
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(0316) 214 4366", "AT", AT),
        ("+43 1 650 454 0987", "AT", AT),
        ("55 11 9 3444 2567", "BR", BR),
        ("+1 306-374-8299   ", "CA", CA),
        ("+86 (21) 3422-5814", "CN", CN),
        ("020 7946 0230", "GB", GB),
        ("(090) 3129-5367", "JP", JP),
        ("(800) 253 0000", "US", US),
        ("+1 512 GR8 0150", "US", US),
        ("51288801505128880150", "US", US),
    ]
}

fn validate_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let numbers = setup_numbers();
    let validators = numbers
        .iter()
        .map(|(input, region, _)| (*input, PhoneNumberValidator::for_region_code(region).unwrap()))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("Validation Comparison");

    group.bench_function("phonevalidator: check()", |b| {
        b.iter(|| {
            for (input, validator) in &validators {
                black_box(validator.check(black_box(*input)));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse() + is_valid()", |b| {
        b.iter(|| {
            for (input, _, region_id) in &numbers {
                if let Ok(number) = rlp::parse(black_box(Some(*region_id)), black_box(input)) {
                    black_box(rlp::is_valid(&number));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
