use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Spanish punctuation beyond ASCII
const EXTRA_PUNCTUATION: &str = "¿¡…“”«»—–−";

/// Spanish stopwords (NLTK list), stored diacritic-folded so they match cleaned tokens
static SPANISH_STOPWORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    let words = [
        "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
        "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
        "este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
        "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos",
        "uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí",
        "antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa",
        "estos", "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas",
        "algunas", "algo", "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas",
        "nosotras", "vosotros", "vosotras", "os", "mío", "mía", "míos", "mías", "tuyo", "tuya",
        "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro", "nuestra", "nuestros",
        "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas", "estoy",
        "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos", "estéis",
        "estén", "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán", "estaría",
        "estarías", "estaríamos", "estaríais", "estarían", "estaba", "estabas", "estábamos",
        "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis",
        "estuvieron", "estuviera", "estuvieras", "estuviéramos", "estuvierais", "estuvieran",
        "estuviese", "estuvieses", "estuviésemos", "estuvieseis", "estuviesen", "estando",
        "estado", "estada", "estados", "estadas", "estad", "he", "has", "ha", "hemos", "habéis",
        "han", "haya", "hayas", "hayamos", "hayáis", "hayan", "habré", "habrás", "habrá",
        "habremos", "habréis", "habrán", "habría", "habrías", "habríamos", "habríais",
        "habrían", "había", "habías", "habíamos", "habíais", "habían", "hube", "hubiste",
        "hubo", "hubimos", "hubisteis", "hubieron", "hubiera", "hubieras", "hubiéramos",
        "hubierais", "hubieran", "hubiese", "hubieses", "hubiésemos", "hubieseis", "hubiesen",
        "habiendo", "habido", "habida", "habidos", "habidas", "soy", "eres", "es", "somos",
        "sois", "son", "sea", "seas", "seamos", "seáis", "sean", "seré", "serás", "será",
        "seremos", "seréis", "serán", "sería", "serías", "seríamos", "seríais", "serían", "era",
        "eras", "éramos", "erais", "eran", "fui", "fuiste", "fue", "fuimos", "fuisteis",
        "fueron", "fuera", "fueras", "fuéramos", "fuerais", "fueran", "fuese", "fueses",
        "fuésemos", "fueseis", "fuesen", "sintiendo", "sentido", "sentida", "sentidos",
        "sentidas", "siente", "sentid", "tengo", "tienes", "tiene", "tenemos", "tenéis",
        "tienen", "tenga", "tengas", "tengamos", "tengáis", "tengan", "tendré", "tendrás",
        "tendrá", "tendremos", "tendréis", "tendrán", "tendría", "tendrías", "tendríamos",
        "tendríais", "tendrían", "tenía", "tenías", "teníamos", "teníais", "tenían", "tuve",
        "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron", "tuviera", "tuvieras",
        "tuviéramos", "tuvierais", "tuvieran", "tuviese", "tuvieses", "tuviésemos",
        "tuvieseis", "tuviesen", "teniendo", "tenido", "tenida", "tenidos", "tenidas", "tened",
    ];
    words.iter().map(|w| fold_diacritics(w)).collect()
});

/// Replace accented Latin letters with their base letter ("Querétaro" -> "Queretaro")
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ñ' => 'n',
            'Ñ' => 'N',
            'ç' => 'c',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(c)
}

/// Lowercase, fold diacritics, turn punctuation into spaces and collapse whitespace
pub fn fold_text(text: &str) -> String {
    let folded = fold_diacritics(&text.to_lowercase());
    let spaced: String = folded
        .chars()
        .map(|c| if is_punctuation(c) { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean Spanish text for keyword analysis: [`fold_text`] plus stopword removal
pub fn clean_text(text: &str) -> String {
    fold_text(text)
        .split(' ')
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Membership in the folded Spanish stopword set
fn is_stopword(word: &str) -> bool {
    SPANISH_STOPWORDS.contains(word)
}
