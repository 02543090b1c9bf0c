//! ISO 639-1 language codes with English and native display names.

use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

/// `(alpha-2 code, English name, native name)`.
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("aa", "Afar", "Afaraf"),
    ("ab", "Abkhazian", "Аҧсуа"),
    ("ae", "Avestan", "Avesta"),
    ("af", "Afrikaans", "Afrikaans"),
    ("ak", "Akan", "Akan"),
    ("am", "Amharic", "አማርኛ"),
    ("an", "Aragonese", "Aragonés"),
    ("ar", "Arabic", "العربية"),
    ("as", "Assamese", "অসমীয়া"),
    ("av", "Avaric", "Авар мацӀ"),
    ("ay", "Aymara", "Aymar aru"),
    ("az", "Azerbaijani", "Azərbaycan dili"),
    ("ba", "Bashkir", "Башҡорт теле"),
    ("be", "Belarusian", "Беларуская"),
    ("bg", "Bulgarian", "Български"),
    ("bi", "Bislama", "Bislama"),
    ("bm", "Bambara", "Bamanankan"),
    ("bn", "Bengali", "বাংলা"),
    ("bo", "Tibetan", "བོད་ཡིག"),
    ("br", "Breton", "Brezhoneg"),
    ("bs", "Bosnian", "Bosanski"),
    ("ca", "Catalan", "Català"),
    ("ce", "Chechen", "Нохчийн мотт"),
    ("ch", "Chamorro", "Chamoru"),
    ("co", "Corsican", "Corsu"),
    ("cr", "Cree", "ᓀᐦᐃᔭᐍᐏᐣ"),
    ("cs", "Czech", "Čeština"),
    ("cu", "Church Slavic", "Ѩзыкъ словѣньскъ"),
    ("cv", "Chuvash", "Чӑваш чӗлхи"),
    ("cy", "Welsh", "Cymraeg"),
    ("da", "Danish", "Dansk"),
    ("de", "German", "Deutsch"),
    ("dv", "Dhivehi", "ދިވެހި"),
    ("dz", "Dzongkha", "རྫོང་ཁ"),
    ("ee", "Ewe", "Eʋegbe"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("eo", "Esperanto", "Esperanto"),
    ("es", "Spanish", "Español"),
    ("et", "Estonian", "Eesti"),
    ("eu", "Basque", "Euskara"),
    ("fa", "Persian", "فارسی"),
    ("ff", "Fulah", "Fulfulde"),
    ("fi", "Finnish", "Suomi"),
    ("fj", "Fijian", "Vosa Vakaviti"),
    ("fo", "Faroese", "Føroyskt"),
    ("fr", "French", "Français"),
    ("fy", "Western Frisian", "Frysk"),
    ("ga", "Irish", "Gaeilge"),
    ("gd", "Scottish Gaelic", "Gàidhlig"),
    ("gl", "Galician", "Galego"),
    ("gn", "Guarani", "Avañe'ẽ"),
    ("gu", "Gujarati", "ગુજરાતી"),
    ("gv", "Manx", "Gaelg"),
    ("ha", "Hausa", "Hausa"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("ho", "Hiri Motu", "Hiri Motu"),
    ("hr", "Croatian", "Hrvatski"),
    ("ht", "Haitian", "Kreyòl ayisyen"),
    ("hu", "Hungarian", "Magyar"),
    ("hy", "Armenian", "Հայերեն"),
    ("hz", "Herero", "Otjiherero"),
    ("ia", "Interlingua", "Interlingua"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("ie", "Interlingue", "Interlingue"),
    ("ig", "Igbo", "Asụsụ Igbo"),
    ("ii", "Sichuan Yi", "ꆈꌠꉙ"),
    ("ik", "Inupiaq", "Iñupiaq"),
    ("io", "Ido", "Ido"),
    ("is", "Icelandic", "Íslenska"),
    ("it", "Italian", "Italiano"),
    ("iu", "Inuktitut", "ᐃᓄᒃᑎᑐᑦ"),
    ("ja", "Japanese", "日本語"),
    ("jv", "Javanese", "Basa Jawa"),
    ("ka", "Georgian", "ქართული"),
    ("kg", "Kongo", "Kikongo"),
    ("ki", "Kikuyu", "Gĩkũyũ"),
    ("kj", "Kuanyama", "Kuanyama"),
    ("kk", "Kazakh", "Қазақ тілі"),
    ("kl", "Kalaallisut", "Kalaallisut"),
    ("km", "Khmer", "ភាសាខ្មែរ"),
    ("kn", "Kannada", "ಕನ್ನಡ"),
    ("ko", "Korean", "한국어"),
    ("kr", "Kanuri", "Kanuri"),
    ("ks", "Kashmiri", "कश्मीरी"),
    ("ku", "Kurdish", "Kurdî"),
    ("kv", "Komi", "Коми кыв"),
    ("kw", "Cornish", "Kernewek"),
    ("ky", "Kirghiz", "Кыргызча"),
    ("la", "Latin", "Latine"),
    ("lb", "Luxembourgish", "Lëtzebuergesch"),
    ("lg", "Ganda", "Luganda"),
    ("li", "Limburgan", "Limburgs"),
    ("ln", "Lingala", "Lingála"),
    ("lo", "Lao", "ພາສາລາວ"),
    ("lt", "Lithuanian", "Lietuvių"),
    ("lu", "Luba-Katanga", "Kiluba"),
    ("lv", "Latvian", "Latviešu"),
    ("mg", "Malagasy", "Malagasy"),
    ("mh", "Marshallese", "Kajin M̧ajeļ"),
    ("mi", "Maori", "Te reo Māori"),
    ("mk", "Macedonian", "Македонски"),
    ("ml", "Malayalam", "മലയാളം"),
    ("mn", "Mongolian", "Монгол"),
    ("mr", "Marathi", "मराठी"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("mt", "Maltese", "Malti"),
    ("my", "Burmese", "မြန်မာဘာသာ"),
    ("na", "Nauru", "Dorerin Naoero"),
    ("nb", "Norwegian Bokmål", "Norsk bokmål"),
    ("nd", "North Ndebele", "isiNdebele"),
    ("ne", "Nepali", "नेपाली"),
    ("ng", "Ndonga", "Owambo"),
    ("nl", "Dutch", "Nederlands"),
    ("nn", "Norwegian Nynorsk", "Norsk nynorsk"),
    ("no", "Norwegian", "Norsk"),
    ("nr", "South Ndebele", "isiNdebele"),
    ("nv", "Navajo", "Diné bizaad"),
    ("ny", "Chichewa", "ChiCheŵa"),
    ("oc", "Occitan", "Occitan"),
    ("oj", "Ojibwa", "ᐊᓂᔑᓈᐯᒧᐎᓐ"),
    ("om", "Oromo", "Afaan Oromoo"),
    ("or", "Oriya", "ଓଡ଼ିଆ"),
    ("os", "Ossetian", "Ирон æвзаг"),
    ("pa", "Panjabi", "ਪੰਜਾਬੀ"),
    ("pi", "Pali", "पाऴि"),
    ("pl", "Polish", "Polski"),
    ("ps", "Pushto", "پښتو"),
    ("pt", "Portuguese", "Português"),
    ("qu", "Quechua", "Runa Simi"),
    ("rm", "Romansh", "Rumantsch grischun"),
    ("rn", "Rundi", "Ikirundi"),
    ("ro", "Romanian", "Română"),
    ("ru", "Russian", "Русский"),
    ("rw", "Kinyarwanda", "Ikinyarwanda"),
    ("sa", "Sanskrit", "संस्कृतम्"),
    ("sc", "Sardinian", "Sardu"),
    ("sd", "Sindhi", "सिन्धी"),
    ("se", "Northern Sami", "Davvisámegiella"),
    ("sg", "Sango", "Yângâ tî sängö"),
    ("si", "Sinhala", "සිංහල"),
    ("sk", "Slovak", "Slovenčina"),
    ("sl", "Slovenian", "Slovenščina"),
    ("sm", "Samoan", "Gagana fa'a Samoa"),
    ("sn", "Shona", "ChiShona"),
    ("so", "Somali", "Soomaaliga"),
    ("sq", "Albanian", "Shqip"),
    ("sr", "Serbian", "Српски"),
    ("ss", "Swati", "SiSwati"),
    ("st", "Southern Sotho", "Sesotho"),
    ("su", "Sundanese", "Basa Sunda"),
    ("sv", "Swedish", "Svenska"),
    ("sw", "Swahili", "Kiswahili"),
    ("ta", "Tamil", "தமிழ்"),
    ("te", "Telugu", "తెలుగు"),
    ("tg", "Tajik", "Тоҷикӣ"),
    ("th", "Thai", "ไทย"),
    ("ti", "Tigrinya", "ትግርኛ"),
    ("tk", "Turkmen", "Türkmençe"),
    ("tl", "Tagalog", "Wikang Tagalog"),
    ("tn", "Tswana", "Setswana"),
    ("to", "Tonga", "Faka Tonga"),
    ("tr", "Turkish", "Türkçe"),
    ("ts", "Tsonga", "Xitsonga"),
    ("tt", "Tatar", "Татар теле"),
    ("tw", "Twi", "Twi"),
    ("ty", "Tahitian", "Reo Tahiti"),
    ("ug", "Uighur", "ئۇيغۇرچە"),
    ("uk", "Ukrainian", "Українська"),
    ("ur", "Urdu", "اردو"),
    ("uz", "Uzbek", "Oʻzbek"),
    ("ve", "Venda", "Tshivenḓa"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("vo", "Volapük", "Volapük"),
    ("wa", "Walloon", "Walon"),
    ("wo", "Wolof", "Wollof"),
    ("xh", "Xhosa", "isiXhosa"),
    ("yi", "Yiddish", "ייִדיש"),
    ("yo", "Yoruba", "Yorùbá"),
    ("za", "Zhuang", "Saɯ cueŋƅ"),
    ("zh", "Chinese", "中文"),
    ("zu", "Zulu", "isiZulu"),
];

/// Common display names missing from the table above.
const EXTRA_NAMES: &[&str] = &["Espanol", "Deutsch", "简体中文", "繁體中文", "Português (Brasil)"];

/// Strip diacritics and drop anything that is not ASCII.
pub fn ascii_fold(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

fn codes() -> &'static HashSet<&'static str> {
    static CODES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    CODES.get_or_init(|| LANGUAGES.iter().map(|(code, _, _)| *code).collect())
}

fn names() -> &'static HashSet<String> {
    static NAMES: OnceLock<HashSet<String>> = OnceLock::new();
    NAMES.get_or_init(|| {
        let mut names = HashSet::new();
        let all = LANGUAGES
            .iter()
            .flat_map(|(_, english, native)| [*english, *native])
            .chain(EXTRA_NAMES.iter().copied());
        for name in all {
            let lower = name.trim().to_lowercase();
            let folded = ascii_fold(&lower).trim().to_string();
            if !folded.is_empty() {
                names.insert(folded);
            }
            names.insert(lower);
        }
        names
    })
}

/// Whether a URL path segment is an ISO 639-1 code, optionally with one
/// region or script subtag (`en`, `pt-BR`, `zh-hant`, `es-419`).
pub fn is_language_code(segment: &str) -> bool {
    let segment = ascii_fold(segment).to_lowercase();
    let (language, subtag) = match segment.split_once(['-', '_']) {
        Some((language, subtag)) => (language, Some(subtag)),
        None => (segment.as_str(), None),
    };
    codes().contains(language) && subtag.map_or(true, is_subtag)
}

/// Region (`us`, `419`) or script (`hant`) subtag.
fn is_subtag(subtag: &str) -> bool {
    let letters = (2..=4).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphabetic());
    let digits = subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit());
    letters || digits
}

/// Whether a link text is a language display name, in English or natively.
pub fn is_language_name(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    let folded = ascii_fold(&lower).trim().to_string();
    let key = if folded.is_empty() { lower } else { folded };
    names().contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert!(is_language_code("es"));
        assert!(is_language_code("EN-us"));
        assert!(is_language_code("zh-hant"));
        assert!(!is_language_code("blog"));
        assert!(!is_language_code("docs"));
        assert!(!is_language_code(""));
    }

    #[test]
    fn test_language_code_subtags() {
        assert!(is_language_code("pt-br"));
        assert!(is_language_code("en_GB"));
        assert!(is_language_code("es-419"));
        assert!(!is_language_code("it-support"));
        assert!(!is_language_code("is-this-real"));
        assert!(!is_language_code("de-"));
        assert!(!is_language_code("en-12"));
    }

    #[test]
    fn test_language_names() {
        assert!(is_language_name("English"));
        assert!(is_language_name(" Français "));
        assert!(is_language_name("francais"));
        assert!(is_language_name("日本語"));
        assert!(is_language_name("Español"));
        assert!(!is_language_name("Pricing"));
    }

    #[test]
    fn test_ascii_fold() {
        assert_eq!(ascii_fold("Español"), "Espanol");
        assert_eq!(ascii_fold("日本語"), "");
    }
}
