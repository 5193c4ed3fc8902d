use crate::cards::Suit;

/// four-bucket rank classification used for legal *play* classes (§4.1).
/// `Special` merges the jack and the ten; the finer 5-bucket split used by
/// the abstraction's history counters lives in `crate::abstraction::bucket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBucket {
    High,    // A, K, Q (12-14)
    Special, // J, 10   (10-11)
    Medium,  // 9-5     (5-9)
    Low,     // 4-2     (2-4)
}

impl RankBucket {
    pub fn of(rank: u8) -> Self {
        match rank {
            12..=14 => RankBucket::High,
            10..=11 => RankBucket::Special,
            5..=9 => RankBucket::Medium,
            2..=4 => RankBucket::Low,
            r => panic!("rank out of range: {r}"),
        }
    }
}

/// whether a played/holdable card is trump, non-trump, or (pre-trump) not
/// yet distinguishable from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    PreTrump,
    Trump,
    Other,
}

/// a bucketed legal-play class: (context, rank bucket). the byte values
/// match the reference trainer's bit-tagged encoding exactly:
/// upper nibble selects context (trump=0x8, other=0x4, pre-trump=0x2),
/// lower nibble selects rank bucket (high=0x8, special=0x4, medium=0x2,
/// low=0x1), so on-disk `Strat` files stay byte-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayClass {
    TrumpHigh = 0b1000_1000,
    TrumpSpecial = 0b1000_0100,
    TrumpMedium = 0b1000_0010,
    TrumpLow = 0b1000_0001,
    OtherHigh = 0b0100_1000,
    OtherSpecial = 0b0100_0100,
    OtherMedium = 0b0100_0010,
    OtherLow = 0b0100_0001,
    PreHigh = 0b0010_1000,
    PreSpecial = 0b0010_0100,
    PreMedium = 0b0010_0010,
    PreLow = 0b0010_0001,
}

impl PlayClass {
    pub fn new(context: Context, bucket: RankBucket) -> Self {
        use Context::*;
        use RankBucket::*;
        match (context, bucket) {
            (Trump, High) => PlayClass::TrumpHigh,
            (Trump, Special) => PlayClass::TrumpSpecial,
            (Trump, Medium) => PlayClass::TrumpMedium,
            (Trump, Low) => PlayClass::TrumpLow,
            (Other, High) => PlayClass::OtherHigh,
            (Other, Special) => PlayClass::OtherSpecial,
            (Other, Medium) => PlayClass::OtherMedium,
            (Other, Low) => PlayClass::OtherLow,
            (PreTrump, High) => PlayClass::PreHigh,
            (PreTrump, Special) => PlayClass::PreSpecial,
            (PreTrump, Medium) => PlayClass::PreMedium,
            (PreTrump, Low) => PlayClass::PreLow,
        }
    }

    /// classify a card given the declared trump (or `PRE_TRUMP`).
    pub fn classify(suit: Suit, rank: u8, trump: Option<Suit>) -> Self {
        let bucket = RankBucket::of(rank);
        let context = match trump {
            None => Context::PreTrump,
            Some(t) if t == suit => Context::Trump,
            Some(_) => Context::Other,
        };
        Self::new(context, bucket)
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0b1000_1000 => PlayClass::TrumpHigh,
            0b1000_0100 => PlayClass::TrumpSpecial,
            0b1000_0010 => PlayClass::TrumpMedium,
            0b1000_0001 => PlayClass::TrumpLow,
            0b0100_1000 => PlayClass::OtherHigh,
            0b0100_0100 => PlayClass::OtherSpecial,
            0b0100_0010 => PlayClass::OtherMedium,
            0b0100_0001 => PlayClass::OtherLow,
            0b0010_1000 => PlayClass::PreHigh,
            0b0010_0100 => PlayClass::PreSpecial,
            0b0010_0010 => PlayClass::PreMedium,
            0b0010_0001 => PlayClass::PreLow,
            b => panic!("unknown play class byte: {b:#04x}"),
        }
    }
}

/// a legal bid amount: pass, or a bid worth `amount + 1` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bid {
    Pass = 0,
    Two = 1,
    Three = 2,
    Four = 3,
}

impl Bid {
    pub fn points(self) -> u8 {
        self as u8 + 1
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Bid::Pass,
            1 => Bid::Two,
            2 => Bid::Three,
            3 => Bid::Four,
            b => panic!("unknown bid byte: {b}"),
        }
    }
}

/// the union of every action the engine can emit. bid bytes occupy `0..=3`
/// and play-class bytes are all `>= 0x21`, so the two never collide and a
/// byte can be decoded back into an `Action` without external context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Bid(Bid),
    Play(PlayClass),
}

impl Action {
    pub fn to_byte(self) -> u8 {
        match self {
            Action::Bid(b) => b.to_byte(),
            Action::Play(p) => p.to_byte(),
        }
    }

    pub fn from_byte(byte: u8) -> Self {
        if byte <= 3 {
            Action::Bid(Bid::from_byte(byte))
        } else {
            Action::Play(PlayClass::from_byte(byte))
        }
    }
}
