//! Static UI strings in every supported language.

use phf::phf_map;
use schema::Language;

pub struct Phrase {
    pub en: &'static str,
    pub ko: &'static str,
    pub ja: &'static str,
}

impl Phrase {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ko => self.ko,
            Language::Ja => self.ja,
        }
    }
}

macro_rules! phrase {
    ($en:expr, $ko:expr, $ja:expr) => {
        Phrase {
            en: $en,
            ko: $ko,
            ja: $ja,
        }
    };
}

static PHRASES: phf::Map<&'static str, Phrase> = phf_map! {
    // Detail view
    "evolution" => phrase!("Evolution", "진화", "進化"),
    "evolution_chain" => phrase!("Evolution Chain", "진화", "進化系統"),
    "abilities" => phrase!("Abilities", "특성", "特性"),
    "hidden_ability" => phrase!("Hidden Ability", "숨겨진 특성", "隠れ特性"),
    "type" => phrase!("Type", "타입", "タイプ"),
    "height" => phrase!("Height", "키", "高さ"),
    "weight" => phrase!("Weight", "몸무게", "重さ"),
    "base_experience" => phrase!("Base Experience", "기초 경험치", "基礎経験値"),
    "base_stats" => phrase!("Base Stats", "종족값", "種族値"),
    "total_stats" => phrase!("Total Stats", "종족값 합계", "種族値合計"),
    "no_evolution" => phrase!("This Pokemon does not evolve", "진화하지 않는 포켓몬입니다", "進化しないポケモンです"),

    // Evolution stages and conditions
    "basic" => phrase!("Basic", "기본", "基本"),
    "stage_1" => phrase!("1st Stage", "1단계", "1段階"),
    "stage_2" => phrase!("2nd Stage", "2단계", "2段階"),
    "stage_3" => phrase!("3rd Stage", "3단계", "3段階"),
    "level" => phrase!("Level", "레벨", "レベル"),
    "friendship" => phrase!("Friendship", "친밀도", "なつき度"),
    "trade" => phrase!("Trade", "교환", "通信交換"),
    "special_location" => phrase!("Special Location", "특정 장소", "特定の場所"),
    "learn_move" => phrase!("Learn Move", "기술 습득", "技を覚える"),
    "party_pokemon" => phrase!("Party Pokemon", "파티 포켓몬", "パーティポケモン"),
    "special_condition" => phrase!("Special Condition", "특수 조건", "特殊条件"),

    // Moves
    "level_up_moves" => phrase!("Level-up Moves", "레벨업 기술", "レベルアップ技"),
    "tm_tr_moves" => phrase!("TM/TR Moves", "TM/TR 기술", "TM/TR技"),
    "special_moves" => phrase!("Special Moves", "특수 기술", "特殊技"),

    // Comparison
    "taller" => phrase!("Taller", "더 큼", "より高い"),
    "shorter" => phrase!("Shorter", "더 작음", "より低い"),
    "heavier" => phrase!("Heavier", "더 무거움", "より重い"),
    "lighter" => phrase!("Lighter", "더 가벼움", "より軽い"),
    "higher" => phrase!("Higher", "더 높음", "より高い"),
    "lower" => phrase!("Lower", "더 낮음", "より低い"),
    "same" => phrase!("Same", "같음", "同じ"),
    "vs" => phrase!("vs", "vs", "vs"),

    // Tournament
    "round_of_16" => phrase!("Round of 16", "16강", "16回戦"),
    "round_of_32" => phrase!("Round of 32", "32강", "32回戦"),
    "round_of_64" => phrase!("Round of 64", "64강", "64回戦"),
    "round_of_128" => phrase!("Round of 128", "128강", "128回戦"),
    "round_of_256" => phrase!("Round of 256", "256강", "256回戦"),
    "quarterfinals" => phrase!("Quarterfinals", "8강", "準々決勝"),
    "semifinals" => phrase!("Semifinals", "4강", "準決勝"),
    "finals" => phrase!("Finals", "결승", "決勝"),
    "current_round" => phrase!("Current Round", "현재 라운드", "現在のラウンド"),
    "current_match" => phrase!("Current Match", "현재 경기", "現在の試合"),
    "remaining_participants" => phrase!("Remaining Participants", "남은 참가자", "残り参加者"),
    "overall_progress" => phrase!("Overall Progress", "전체 진행률", "全体の進捗"),
    "champion" => phrase!("Champion", "우승", "優勝"),

    // Favorites
    "favorites" => phrase!("Favorites", "즐겨찾기", "お気に入り"),
    "no_favorites" => phrase!("No favorite Pokemon yet", "즐겨찾기한 포켓몬이 없습니다", "お気に入りのポケモンはまだいません"),

    // Search / errors
    "no_pokemon_found" => phrase!("No Pokemon found matching", "일치하는 포켓몬을 찾을 수 없습니다", "ポケモンが見つかりません"),
    "error" => phrase!("Error", "오류", "エラー"),
    "retry" => phrase!("Retry", "다시 시도", "再試行"),
};

/// Looks up a UI string. Unknown keys come back verbatim.
pub fn t(key: &str, language: Language) -> String {
    match PHRASES.get(key) {
        Some(phrase) => phrase.get(language).to_string(),
        None => key.to_string(),
    }
}

pub fn has_phrase(key: &str) -> bool {
    PHRASES.contains_key(key)
}
