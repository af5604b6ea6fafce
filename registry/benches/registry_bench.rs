use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lockpass_crypto::{
    bound_voucher_message, derive_address, keypair_from_seed, open_voucher_message, sign_voucher,
};
use lockpass_nullables::{NullLedger, NullRoles};
use lockpass_registry::{LengthValidator, VoucherEngine, VoucherRequest};
use lockpass_types::{PassClass, RegistryParams};

fn length_validator_bench(c: &mut Criterion) {
    let v = LengthValidator::default();
    let mixed = "中文字符测试abc".repeat(4);

    c.bench_function("len_valid_mixed_width", |b| {
        b.iter(|| v.is_valid(black_box(6), black_box(&mixed)))
    });
}

fn redeem_bound_bench(c: &mut Criterion) {
    let foundation = keypair_from_seed(&[0xF0; 32]);
    let admin = derive_address(&foundation.public);
    let voucher = VoucherRequest::bound(
        sign_voucher(&bound_voucher_message(1, PassClass::A), &foundation),
        PassClass::A,
        1,
    )
    .with_name("bench");
    let caller = derive_address(&keypair_from_seed(&[1; 32]).public);

    c.bench_function("redeem_bound_voucher", |b| {
        b.iter_batched(
            || {
                VoucherEngine::new(
                    RegistryParams::default(),
                    NullLedger::new(),
                    NullRoles::with_admin(&admin),
                )
            },
            |mut engine| engine.redeem(&caller, black_box(&voucher)),
            BatchSize::SmallInput,
        )
    });
}

fn redeem_open_bench(c: &mut Criterion) {
    let foundation = keypair_from_seed(&[0xF0; 32]);
    let issuer_key = keypair_from_seed(&[1; 32]);
    let issuer = derive_address(&issuer_key.public);
    let mut engine = VoucherEngine::new(
        RegistryParams::default(),
        NullLedger::new(),
        NullRoles::with_admin(&derive_address(&foundation.public)),
    );
    let bound = VoucherRequest::bound(
        sign_voucher(&bound_voucher_message(1, PassClass::A), &foundation),
        PassClass::A,
        1,
    );
    engine.redeem(&issuer, &bound).unwrap();
    let invite = VoucherRequest::open(
        sign_voucher(&open_voucher_message(PassClass::C), &issuer_key),
        PassClass::C,
    );
    let invitee = derive_address(&keypair_from_seed(&[2; 32]).public);

    // The issuer never names a pass, so every attempt verifies the signature
    // and is then rejected without committing.
    c.bench_function("reject_open_voucher", |b| {
        b.iter(|| engine.redeem(&invitee, black_box(&invite)).is_err())
    });
}

criterion_group!(
    benches,
    length_validator_bench,
    redeem_bound_bench,
    redeem_open_bench,
);
criterion_main!(benches);
