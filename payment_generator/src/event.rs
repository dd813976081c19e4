use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

const MIN_AMOUNT_CENTS: i64 = 100;
const MAX_AMOUNT_CENTS: i64 = 50_000;

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }
    };
}

wire_enum!(Currency {
    Eur => "EUR",
    Gbp => "GBP",
    Usd => "USD",
});

wire_enum!(Merchant {
    Cafe => "MRC-CAFE-001",
    Grocery => "MRC-GROCERY-042",
    Online => "MRC-ONLINE-999",
});

wire_enum!(PaymentStatus {
    Authorized => "AUTHORIZED",
    Captured => "CAPTURED",
    Declined => "DECLINED",
});

wire_enum!(PaymentSource {
    Card => "CARD",
    Wallet => "WALLET",
    BankTransfer => "BANK_TRANSFER",
});

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEvent {
    pub payment_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub amount: Decimal,
    pub currency: Currency,
    pub merchant_id: Merchant,
    pub status: PaymentStatus,
    pub source: PaymentSource,
}

impl PaymentEvent {
    /// ISO-8601 with microseconds and an explicit `+00:00` offset.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> PaymentEvent {
    let payment_id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    let cents = rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS);

    PaymentEvent {
        payment_id,
        created_at: now,
        amount: Decimal::new(cents, 2),
        currency: pick(rng, Currency::ALL),
        merchant_id: pick(rng, Merchant::ALL),
        status: pick(rng, PaymentStatus::ALL),
        source: pick(rng, PaymentSource::ALL),
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}
