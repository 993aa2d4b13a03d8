// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translations compiled into the crate.
//!
//! Each table pairs a canonical English name (see [`crate::names`]) with its
//! translation. Tables are language-level: regional variants such as `de-CH`
//! reach them through the localizer's fallback chain. English has no table
//! because canonical names already are English.
//!
//! ## Adding a language
//!
//! 1. Add a `const XX: &[(&str, &str)]` table with one row per activity
//! 2. Register it in [`TABLES`]
//!
//! The tests below fail until every activity has exactly one row.

use super::LocaleCatalog;
use crate::locale::Locale;

/// Compiled-in tables for German, Spanish, French and Japanese.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    /// Languages with a bundled table, in display order.
    pub fn languages() -> impl Iterator<Item = &'static str> {
        TABLES.iter().map(|(code, _)| *code)
    }

    /// Raw table for a language code.
    pub fn table(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
        TABLES
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, table)| *table)
    }

    /// Same as [`LocaleCatalog::lookup`] but with a `'static` result.
    /// Only language-level locales (`de`, not `de-AT`) match.
    pub fn translate(key: &str, locale: &Locale) -> Option<&'static str> {
        if locale.script().is_some() || locale.region().is_some() {
            return None;
        }
        Self::translate_language(key, locale.language())
    }

    /// Translation of `key` from the table for a bare language code.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_names::BundledCatalog;
    ///
    /// assert_eq!(BundledCatalog::translate_language("Stair Climbing", "de"), Some("Treppensteigen"));
    /// assert_eq!(BundledCatalog::translate_language("Stair Climbing", "en"), None);
    /// ```
    pub fn translate_language(key: &str, language: &str) -> Option<&'static str> {
        Self::table(language)?
            .iter()
            .find(|(canonical, _)| *canonical == key)
            .map(|(_, translated)| *translated)
    }
}

impl LocaleCatalog for BundledCatalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        Self::translate(key, locale)
    }

    fn locales(&self) -> Vec<Locale> {
        Self::languages()
            .filter_map(|code| Locale::parse(code).ok())
            .collect()
    }
}

type Table = &'static [(&'static str, &'static str)];

const TABLES: &[(&str, Table)] = &[("de", DE), ("es", ES), ("fr", FR), ("ja", JA)];

// ─── German ─────────────────────────────────────────────────────────

const DE: Table = &[
    ("American Football", "American Football"),
    ("Archery", "Bogenschießen"),
    ("Australian Football", "Australian Football"),
    ("Badminton", "Badminton"),
    ("Baseball", "Baseball"),
    ("Basketball", "Basketball"),
    ("Bowling", "Bowling"),
    ("Boxing", "Boxen"),
    ("Climbing", "Klettern"),
    ("Cricket", "Cricket"),
    ("Cross Training", "Cross-Training"),
    ("Curling", "Curling"),
    ("Cycling", "Radfahren"),
    ("Dance", "Tanzen"),
    ("Dance Inspired Training", "Tanzinspiriertes Training"),
    ("Elliptical", "Crosstrainer"),
    ("Equestrian Sports", "Reitsport"),
    ("Fencing", "Fechten"),
    ("Fishing", "Angeln"),
    ("Functional Strength Training", "Funktionelles Krafttraining"),
    ("Golf", "Golf"),
    ("Gymnastics", "Turnen"),
    ("Handball", "Handball"),
    ("Hiking", "Wandern"),
    ("Hockey", "Hockey"),
    ("Hunting", "Jagen"),
    ("Lacrosse", "Lacrosse"),
    ("Martial Arts", "Kampfsport"),
    ("Mind and Body", "Körper und Geist"),
    ("Mixed Metabolic Cardio Training", "Gemischtes metabolisches Cardiotraining"),
    ("Paddle Sports", "Paddelsport"),
    ("Play", "Spielen"),
    ("Preparation and Recovery", "Vorbereitung und Erholung"),
    ("Racquetball", "Racquetball"),
    ("Rowing", "Rudern"),
    ("Rugby", "Rugby"),
    ("Running", "Laufen"),
    ("Sailing", "Segeln"),
    ("Skating Sports", "Eislaufsport"),
    ("Snow Sports", "Schneesport"),
    ("Soccer", "Fußball"),
    ("Softball", "Softball"),
    ("Squash", "Squash"),
    ("Stair Climbing", "Treppensteigen"),
    ("Surfing Sports", "Surfsport"),
    ("Swimming", "Schwimmen"),
    ("Table Tennis", "Tischtennis"),
    ("Tennis", "Tennis"),
    ("Track and Field", "Leichtathletik"),
    ("Traditional Strength Training", "Traditionelles Krafttraining"),
    ("Volleyball", "Volleyball"),
    ("Walking", "Gehen"),
    ("Water Fitness", "Wasserfitness"),
    ("Water Polo", "Wasserball"),
    ("Water Sports", "Wassersport"),
    ("Wrestling", "Ringen"),
    ("Yoga", "Yoga"),
    ("Barre", "Barre"),
    ("Core Training", "Rumpftraining"),
    ("Cross Country Skiing", "Skilanglauf"),
    ("Downhill Skiing", "Ski alpin"),
    ("Flexibility", "Beweglichkeit"),
    ("High Intensity Interval Training", "Hochintensives Intervalltraining"),
    ("Jump Rope", "Seilspringen"),
    ("Kickboxing", "Kickboxen"),
    ("Pilates", "Pilates"),
    ("Snowboarding", "Snowboarden"),
    ("Stairs", "Treppen"),
    ("Step Training", "Step-Training"),
    ("Wheelchair Walk Pace", "Rollstuhl (Gehtempo)"),
    ("Wheelchair Run Pace", "Rollstuhl (Lauftempo)"),
    ("Tai Chi", "Tai-Chi"),
    ("Mixed Cardio", "Gemischtes Cardio"),
    ("Hand Cycling", "Handbike"),
    ("Disc Sports", "Disc-Sport"),
    ("Fitness Gaming", "Fitness-Gaming"),
    ("Cardio Dance", "Cardio-Tanz"),
    ("Social Dance", "Gesellschaftstanz"),
    ("Pickleball", "Pickleball"),
    ("Cooldown", "Cooldown"),
    ("Swim Bike Run", "Schwimmen, Radfahren, Laufen"),
    ("Transition", "Wechsel"),
    ("Underwater Diving", "Tauchen"),
    ("Other", "Sonstiges"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: Table = &[
    ("American Football", "Fútbol americano"),
    ("Archery", "Tiro con arco"),
    ("Australian Football", "Fútbol australiano"),
    ("Badminton", "Bádminton"),
    ("Baseball", "Béisbol"),
    ("Basketball", "Baloncesto"),
    ("Bowling", "Bolos"),
    ("Boxing", "Boxeo"),
    ("Climbing", "Escalada"),
    ("Cricket", "Críquet"),
    ("Cross Training", "Entrenamiento cruzado"),
    ("Curling", "Curling"),
    ("Cycling", "Ciclismo"),
    ("Dance", "Baile"),
    ("Dance Inspired Training", "Entrenamiento inspirado en el baile"),
    ("Elliptical", "Elíptica"),
    ("Equestrian Sports", "Deportes ecuestres"),
    ("Fencing", "Esgrima"),
    ("Fishing", "Pesca"),
    ("Functional Strength Training", "Fuerza funcional"),
    ("Golf", "Golf"),
    ("Gymnastics", "Gimnasia"),
    ("Handball", "Balonmano"),
    ("Hiking", "Senderismo"),
    ("Hockey", "Hockey"),
    ("Hunting", "Caza"),
    ("Lacrosse", "Lacrosse"),
    ("Martial Arts", "Artes marciales"),
    ("Mind and Body", "Cuerpo y mente"),
    ("Mixed Metabolic Cardio Training", "Entrenamiento cardiovascular metabólico mixto"),
    ("Paddle Sports", "Deportes de pala"),
    ("Play", "Juego"),
    ("Preparation and Recovery", "Preparación y recuperación"),
    ("Racquetball", "Ráquetbol"),
    ("Rowing", "Remo"),
    ("Rugby", "Rugby"),
    ("Running", "Correr"),
    ("Sailing", "Vela"),
    ("Skating Sports", "Patinaje"),
    ("Snow Sports", "Deportes de nieve"),
    ("Soccer", "Fútbol"),
    ("Softball", "Sóftbol"),
    ("Squash", "Squash"),
    ("Stair Climbing", "Subir escaleras"),
    ("Surfing Sports", "Surf"),
    ("Swimming", "Natación"),
    ("Table Tennis", "Tenis de mesa"),
    ("Tennis", "Tenis"),
    ("Track and Field", "Atletismo"),
    ("Traditional Strength Training", "Fuerza tradicional"),
    ("Volleyball", "Voleibol"),
    ("Walking", "Caminar"),
    ("Water Fitness", "Fitness acuático"),
    ("Water Polo", "Waterpolo"),
    ("Water Sports", "Deportes acuáticos"),
    ("Wrestling", "Lucha"),
    ("Yoga", "Yoga"),
    ("Barre", "Barre"),
    ("Core Training", "Entrenamiento del core"),
    ("Cross Country Skiing", "Esquí de fondo"),
    ("Downhill Skiing", "Esquí alpino"),
    ("Flexibility", "Flexibilidad"),
    ("High Intensity Interval Training", "Entrenamiento de intervalos de alta intensidad"),
    ("Jump Rope", "Saltar la cuerda"),
    ("Kickboxing", "Kickboxing"),
    ("Pilates", "Pilates"),
    ("Snowboarding", "Snowboard"),
    ("Stairs", "Escaleras"),
    ("Step Training", "Step"),
    ("Wheelchair Walk Pace", "Silla de ruedas a ritmo de paseo"),
    ("Wheelchair Run Pace", "Silla de ruedas a ritmo de carrera"),
    ("Tai Chi", "Taichí"),
    ("Mixed Cardio", "Cardio mixto"),
    ("Hand Cycling", "Handbike"),
    ("Disc Sports", "Deportes de disco"),
    ("Fitness Gaming", "Videojuegos de fitness"),
    ("Cardio Dance", "Baile cardio"),
    ("Social Dance", "Baile social"),
    ("Pickleball", "Pickleball"),
    ("Cooldown", "Enfriamiento"),
    ("Swim Bike Run", "Nadar, pedalear y correr"),
    ("Transition", "Transición"),
    ("Underwater Diving", "Buceo"),
    ("Other", "Otro"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: Table = &[
    ("American Football", "Football américain"),
    ("Archery", "Tir à l'arc"),
    ("Australian Football", "Football australien"),
    ("Badminton", "Badminton"),
    ("Baseball", "Baseball"),
    ("Basketball", "Basketball"),
    ("Bowling", "Bowling"),
    ("Boxing", "Boxe"),
    ("Climbing", "Escalade"),
    ("Cricket", "Cricket"),
    ("Cross Training", "Cross-training"),
    ("Curling", "Curling"),
    ("Cycling", "Cyclisme"),
    ("Dance", "Danse"),
    ("Dance Inspired Training", "Entraînement inspiré de la danse"),
    ("Elliptical", "Vélo elliptique"),
    ("Equestrian Sports", "Sports équestres"),
    ("Fencing", "Escrime"),
    ("Fishing", "Pêche"),
    ("Functional Strength Training", "Renforcement musculaire fonctionnel"),
    ("Golf", "Golf"),
    ("Gymnastics", "Gymnastique"),
    ("Handball", "Handball"),
    ("Hiking", "Randonnée"),
    ("Hockey", "Hockey"),
    ("Hunting", "Chasse"),
    ("Lacrosse", "Crosse"),
    ("Martial Arts", "Arts martiaux"),
    ("Mind and Body", "Corps et esprit"),
    ("Mixed Metabolic Cardio Training", "Entraînement cardio métabolique mixte"),
    ("Paddle Sports", "Sports de pagaie"),
    ("Play", "Jeu"),
    ("Preparation and Recovery", "Préparation et récupération"),
    ("Racquetball", "Racquetball"),
    ("Rowing", "Aviron"),
    ("Rugby", "Rugby"),
    ("Running", "Course à pied"),
    ("Sailing", "Voile"),
    ("Skating Sports", "Patinage"),
    ("Snow Sports", "Sports de neige"),
    ("Soccer", "Football"),
    ("Softball", "Softball"),
    ("Squash", "Squash"),
    ("Stair Climbing", "Montée d'escaliers"),
    ("Surfing Sports", "Surf"),
    ("Swimming", "Natation"),
    ("Table Tennis", "Tennis de table"),
    ("Tennis", "Tennis"),
    ("Track and Field", "Athlétisme"),
    ("Traditional Strength Training", "Renforcement musculaire traditionnel"),
    ("Volleyball", "Volleyball"),
    ("Walking", "Marche"),
    ("Water Fitness", "Aquagym"),
    ("Water Polo", "Water-polo"),
    ("Water Sports", "Sports nautiques"),
    ("Wrestling", "Lutte"),
    ("Yoga", "Yoga"),
    ("Barre", "Barre au sol"),
    ("Core Training", "Gainage"),
    ("Cross Country Skiing", "Ski de fond"),
    ("Downhill Skiing", "Ski alpin"),
    ("Flexibility", "Souplesse"),
    ("High Intensity Interval Training", "Entraînement fractionné de haute intensité"),
    ("Jump Rope", "Corde à sauter"),
    ("Kickboxing", "Kickboxing"),
    ("Pilates", "Pilates"),
    ("Snowboarding", "Snowboard"),
    ("Stairs", "Escaliers"),
    ("Step Training", "Step"),
    ("Wheelchair Walk Pace", "Fauteuil roulant, allure marche"),
    ("Wheelchair Run Pace", "Fauteuil roulant, allure course"),
    ("Tai Chi", "Tai-chi"),
    ("Mixed Cardio", "Cardio mixte"),
    ("Hand Cycling", "Handbike"),
    ("Disc Sports", "Sports de disque"),
    ("Fitness Gaming", "Jeux vidéo de fitness"),
    ("Cardio Dance", "Danse cardio"),
    ("Social Dance", "Danse de salon"),
    ("Pickleball", "Pickleball"),
    ("Cooldown", "Retour au calme"),
    ("Swim Bike Run", "Natation, vélo, course"),
    ("Transition", "Transition"),
    ("Underwater Diving", "Plongée sous-marine"),
    ("Other", "Autre"),
];

// ─── Japanese ───────────────────────────────────────────────────────

const JA: Table = &[
    ("American Football", "アメリカンフットボール"),
    ("Archery", "アーチェリー"),
    ("Australian Football", "オーストラリアンフットボール"),
    ("Badminton", "バドミントン"),
    ("Baseball", "野球"),
    ("Basketball", "バスケットボール"),
    ("Bowling", "ボウリング"),
    ("Boxing", "ボクシング"),
    ("Climbing", "クライミング"),
    ("Cricket", "クリケット"),
    ("Cross Training", "クロストレーニング"),
    ("Curling", "カーリング"),
    ("Cycling", "サイクリング"),
    ("Dance", "ダンス"),
    ("Dance Inspired Training", "ダンス系トレーニング"),
    ("Elliptical", "エリプティカル"),
    ("Equestrian Sports", "馬術"),
    ("Fencing", "フェンシング"),
    ("Fishing", "釣り"),
    ("Functional Strength Training", "機能的筋力トレーニング"),
    ("Golf", "ゴルフ"),
    ("Gymnastics", "体操"),
    ("Handball", "ハンドボール"),
    ("Hiking", "ハイキング"),
    ("Hockey", "ホッケー"),
    ("Hunting", "狩猟"),
    ("Lacrosse", "ラクロス"),
    ("Martial Arts", "武道"),
    ("Mind and Body", "マインドアンドボディ"),
    ("Mixed Metabolic Cardio Training", "混合代謝カーディオトレーニング"),
    ("Paddle Sports", "パドルスポーツ"),
    ("Play", "遊び"),
    ("Preparation and Recovery", "準備とリカバリー"),
    ("Racquetball", "ラケットボール"),
    ("Rowing", "ローイング"),
    ("Rugby", "ラグビー"),
    ("Running", "ランニング"),
    ("Sailing", "セーリング"),
    ("Skating Sports", "スケート"),
    ("Snow Sports", "スノースポーツ"),
    ("Soccer", "サッカー"),
    ("Softball", "ソフトボール"),
    ("Squash", "スカッシュ"),
    ("Stair Climbing", "階段昇降"),
    ("Surfing Sports", "サーフィン"),
    ("Swimming", "水泳"),
    ("Table Tennis", "卓球"),
    ("Tennis", "テニス"),
    ("Track and Field", "陸上競技"),
    ("Traditional Strength Training", "従来型筋力トレーニング"),
    ("Volleyball", "バレーボール"),
    ("Walking", "ウォーキング"),
    ("Water Fitness", "水中フィットネス"),
    ("Water Polo", "水球"),
    ("Water Sports", "ウォータースポーツ"),
    ("Wrestling", "レスリング"),
    ("Yoga", "ヨガ"),
    ("Barre", "バー"),
    ("Core Training", "コアトレーニング"),
    ("Cross Country Skiing", "クロスカントリースキー"),
    ("Downhill Skiing", "ダウンヒルスキー"),
    ("Flexibility", "柔軟運動"),
    ("High Intensity Interval Training", "高強度インターバルトレーニング"),
    ("Jump Rope", "縄跳び"),
    ("Kickboxing", "キックボクシング"),
    ("Pilates", "ピラティス"),
    ("Snowboarding", "スノーボード"),
    ("Stairs", "階段"),
    ("Step Training", "ステップトレーニング"),
    ("Wheelchair Walk Pace", "車椅子（ウォークペース）"),
    ("Wheelchair Run Pace", "車椅子（ランペース）"),
    ("Tai Chi", "太極拳"),
    ("Mixed Cardio", "ミックスカーディオ"),
    ("Hand Cycling", "ハンドサイクリング"),
    ("Disc Sports", "ディスクスポーツ"),
    ("Fitness Gaming", "フィットネスゲーム"),
    ("Cardio Dance", "カーディオダンス"),
    ("Social Dance", "社交ダンス"),
    ("Pickleball", "ピックルボール"),
    ("Cooldown", "クールダウン"),
    ("Swim Bike Run", "スイム・バイク・ラン"),
    ("Transition", "トランジション"),
    ("Underwater Diving", "ダイビング"),
    ("Other", "その他"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::WorkoutActivityType;
    use crate::names::name;
    use std::collections::HashSet;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn german_stair_climbing() {
        assert_eq!(
            BundledCatalog.lookup("Stair Climbing", &locale("de")),
            Some("Treppensteigen")
        );
    }

    #[test]
    fn every_table_covers_every_activity_once() {
        for (code, table) in TABLES {
            let keys: HashSet<&str> = table.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys.len(), table.len(), "{code} table has duplicate keys");

            for activity in WorkoutActivityType::ALL {
                assert!(
                    keys.contains(name(*activity)),
                    "{code} table is missing '{}'",
                    name(*activity)
                );
            }
            assert_eq!(
                table.len(),
                WorkoutActivityType::ALL.len(),
                "{code} table has keys that are not canonical names"
            );
        }
    }

    #[test]
    fn translations_are_non_empty() {
        for (code, table) in TABLES {
            for (key, value) in *table {
                assert!(!value.trim().is_empty(), "{code}: empty translation for '{key}'");
            }
        }
    }

    #[test]
    fn regional_locales_do_not_match_directly() {
        assert_eq!(BundledCatalog.lookup("Running", &locale("de-AT")), None);
        assert_eq!(BundledCatalog.lookup("Running", &locale("de")), Some("Laufen"));
    }

    #[test]
    fn english_and_unshipped_languages_have_no_table() {
        assert_eq!(BundledCatalog.lookup("Running", &locale("en")), None);
        assert_eq!(BundledCatalog.lookup("Running", &locale("it")), None);
        assert!(BundledCatalog::table("en").is_none());
    }

    #[test]
    fn languages_listed_in_order() {
        assert_eq!(BundledCatalog::languages().collect::<Vec<_>>(), ["de", "es", "fr", "ja"]);
    }
}
