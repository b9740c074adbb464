//! Built-in Japanese trigger lists.

use crate::types::EmotionCategory;

use super::lexicon_impl::EmotionLexicon;

const HAPPY: &[&str] = &[
    "嬉しい",
    "うれしい",
    "楽しい",
    "たのしい",
    "ありがとう",
    "幸せ",
    "しあわせ",
    "最高",
    "よかった",
    "良かった",
    "わーい",
    "笑",
    "♪",
    "😊",
    "😄",
];

const SAD: &[&str] = &[
    "悲しい",
    "かなしい",
    "寂しい",
    "さみしい",
    "辛い",
    "つらい",
    "残念",
    "落ち込",
    "泣",
    "涙",
    "。。。",
    "😢",
    "😭",
];

const SURPRISED: &[&str] = &[
    "びっくり",
    "ビックリ",
    "まさか",
    "本当？",
    "ほんと？",
    "マジ？",
    "まじ？",
    "えっ",
    "驚",
    "！？",
    "!?",
    "？？",
    "😲",
    "😮",
];

const ANGRY: &[&str] = &[
    "ムカつく",
    "むかつく",
    "イライラ",
    "いらいら",
    "許せない",
    "腹立",
    "ふざけ",
    "うざい",
    "怒",
    "😠",
    "😡",
    "💢",
];

const LOVE: &[&str] = &[
    "大好き",
    "愛してる",
    "会いたい",
    "好き",
    "すき",
    "ラブ",
    "愛",
    "❤",
    "💕",
    "😍",
];

const SHY: &[&str] = &[
    "恥ずかしい",
    "はずかしい",
    "もじもじ",
    "照れ",
    "赤面",
    "///",
    "😳",
];

const EXCITED: &[&str] = &[
    "わくわく",
    "ワクワク",
    "楽しみ",
    "テンション",
    "すごい",
    "やった",
    "！！",
    "!!",
    "🤩",
    "🔥",
];

const WORRIED: &[&str] = &[
    "心配",
    "不安",
    "大丈夫？",
    "だいじょうぶ？",
    "困った",
    "怖い",
    "こわい",
    "やばい",
    "ヤバい",
    "😰",
    "😟",
];

impl EmotionLexicon {
    /// Built-in trigger list for a category. Empty for `Normal`.
    pub fn default_triggers(category: EmotionCategory) -> &'static [&'static str] {
        match category {
            EmotionCategory::Happy => HAPPY,
            EmotionCategory::Sad => SAD,
            EmotionCategory::Surprised => SURPRISED,
            EmotionCategory::Angry => ANGRY,
            EmotionCategory::Love => LOVE,
            EmotionCategory::Shy => SHY,
            EmotionCategory::Excited => EXCITED,
            EmotionCategory::Worried => WORRIED,
            EmotionCategory::Normal => &[],
        }
    }
}

impl Default for EmotionLexicon {
    /// The built-in Japanese lexicon: words, short phrases, emoji and doubled
    /// punctuation for every non-baseline category.
    fn default() -> Self {
        let mut lexicon = Self::new();
        for category in EmotionCategory::SCORED {
            lexicon.add_triggers(category, Self::default_triggers(category).iter().copied());
        }
        lexicon
    }
}
