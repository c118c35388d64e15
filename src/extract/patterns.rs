//! Static pattern tables for identifier extraction.
//!
//! The short-name patterns are hand-tuned to the legal-act phrasing
//! conventions of each official EU language. Every pattern anchors at the
//! start of the title and captures the act type plus its number; where the
//! issuing institution appears inside the matched span it is captured in
//! the `institution` group so it can be stripped out. This is data, not
//! logic — adjusting a language means editing its row here.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Canonical structured identifier of an EU act, e.g. "(EU) 2023/138".
    pub static ref EU_ID_RE: Regex = Regex::new(r"\(EU\) \d{4}/\d{1,5}").unwrap();

    /// Legacy identifier embedded in older titles, e.g. "88/610/EEC".
    pub static ref EEC_ID_RE: Regex = Regex::new(r"\d{2}/\d{1,4}/[A-Z][A-ZØ]{2,3}").unwrap();

    pub static ref SHORT_NAME_PATTERNS: HashMap<&'static str, Regex> = {
        let table: &[(&str, &str)] = &[
            ("bg", r"(?i)^(?:Регламент за изпълнение|Делегиран регламент|Регламент|Директива за изпълнение|Делегирана директива|Директива|Решение за изпълнение|Делегирано решение|Решение)\s+\(ЕС\)\s+(?:№\s+)?\d{4}/\d{1,5}(?P<institution>\s+на\s+(?:Европейския парламент и на Съвета|Комисията|Съвета))?"),
            ("es", r"(?i)^(?:Reglamento de Ejecución|Reglamento Delegado|Reglamento|Directiva de Ejecución|Directiva Delegada|Directiva|Decisión de Ejecución|Decisión Delegada|Decisión)\s+\(UE\)\s+(?:n\.?º\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:del Parlamento Europeo y del Consejo|de la Comisión|del Consejo))?"),
            ("cs", r"(?i)^(?:Prováděcí nařízení|Nařízení v přenesené pravomoci|Nařízení|Prováděcí směrnice|Směrnice|Prováděcí rozhodnutí|Rozhodnutí)(?P<institution>\s+(?:Evropského parlamentu a Rady|Komise|Rady))?\s+\(EU\)\s+(?:č\.\s+)?\d{4}/\d{1,5}"),
            ("da", r"(?i)^(?P<institution>(?:Europa-Parlamentets og Rådets|Kommissionens|Rådets)\s+)?(?:gennemførelsesforordning|delegerede forordning|delegeret forordning|forordning|gennemførelsesdirektiv|direktiv|gennemførelsesafgørelse|afgørelse)\s+\(EU\)\s+(?:nr\.\s+)?\d{4}/\d{1,5}"),
            ("de", r"(?i)^(?:Durchführungsverordnung|Delegierte Verordnung|Verordnung|Durchführungsrichtlinie|Delegierte Richtlinie|Richtlinie|Durchführungsbeschluss|Delegierter Beschluss|Beschluss)\s+\(EU\)\s+(?:Nr\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:des Europäischen Parlaments und des Rates|der Kommission|des Rates))?"),
            ("et", r"(?i)^(?P<institution>(?:Euroopa Parlamendi ja nõukogu|Komisjoni|Nõukogu)\s+)?(?:rakendusmäärus|delegeeritud määrus|määrus|rakendusdirektiiv|direktiiv|rakendusotsus|otsus)\s+\(EL\)\s+(?:nr\s+)?\d{4}/\d{1,5}"),
            ("el", r"(?i)^(?:Εκτελεστικός κανονισμός|Κατ' εξουσιοδότηση κανονισμός|Κανονισμός|Εκτελεστική οδηγία|Οδηγία|Εκτελεστική απόφαση|Απόφαση)\s+\(ΕΕ\)\s+(?:αριθ\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:του Ευρωπαϊκού Κοινοβουλίου και του Συμβουλίου|της Επιτροπής|του Συμβουλίου))?"),
            ("en", r"(?i)^(?P<institution>(?:European Parliament and Council|Commission|Council)\s+)?(?:Implementing Regulation|Delegated Regulation|Regulation|Implementing Directive|Delegated Directive|Directive|Implementing Decision|Delegated Decision|Decision)\s+\(EU\)\s+(?:No\s+)?\d{4}/\d{1,5}"),
            ("fr", r"(?i)^(?:Règlement d'exécution|Règlement délégué|Règlement|Directive d'exécution|Directive déléguée|Directive|Décision d'exécution|Décision déléguée|Décision)\s+\(UE\)\s+(?:n[°o]\s*)?\d{4}/\d{1,5}(?P<institution>\s+(?:du Parlement européen et du Conseil|de la Commission|du Conseil))?"),
            ("ga", r"(?i)^(?:Rialachán Cur Chun Feidhme|Rialachán Tarmligthe|Rialachán|Treoir Cur Chun Feidhme|Treoir|Cinneadh Cur Chun Feidhme|Cinneadh)\s+\(AE\)\s+(?:Uimh\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:ó Pharlaimint na hEorpa agus ón gComhairle|ón gCoimisiún|ón gComhairle))?"),
            ("hr", r"(?i)^(?:Provedbena uredba|Delegirana uredba|Uredba|Provedbena direktiva|Delegirana direktiva|Direktiva|Provedbena odluka|Delegirana odluka|Odluka)(?P<institution>\s+(?:Europskog parlamenta i Vijeća|Komisije|Vijeća))?\s+\(EU\)\s+(?:br\.\s+)?\d{4}/\d{1,5}"),
            ("it", r"(?i)^(?:Regolamento di esecuzione|Regolamento delegato|Regolamento|Direttiva di esecuzione|Direttiva delegata|Direttiva|Decisione di esecuzione|Decisione delegata|Decisione)\s+\(UE\)\s+(?:n\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:del Parlamento europeo e del Consiglio|della Commissione|del Consiglio))?"),
            ("lv", r"(?i)^(?P<institution>(?:Eiropas Parlamenta un Padomes|Komisijas|Padomes)\s+)?(?:Īstenošanas regula|Deleģētā regula|Regula|Īstenošanas direktīva|Direktīva|Īstenošanas lēmums|Lēmums)\s+\(ES\)\s+(?:Nr\.\s+)?\d{4}/\d{1,5}"),
            ("lt", r"(?i)^(?P<institution>(?:Europos Parlamento ir Tarybos|Komisijos|Tarybos)\s+)?(?:įgyvendinimo reglamentas|deleguotasis reglamentas|reglamentas|įgyvendinimo direktyva|direktyva|įgyvendinimo sprendimas|sprendimas)\s+\(ES\)\s+(?:Nr\.\s+)?\d{4}/\d{1,5}"),
            ("hu", r"(?i)^(?P<institution>(?:Az Európai Parlament és a Tanács|A Bizottság|A Tanács)\s+)?\(EU\)\s+\d{4}/\d{1,5}\s+(?:végrehajtási rendelete|felhatalmazáson alapuló rendelete|rendelete|végrehajtási irányelve|irányelve|végrehajtási határozata|határozata)"),
            ("mt", r"(?i)^(?:Regolament ta' Implimentazzjoni|Regolament Delegat|Regolament|Direttiva ta' Implimentazzjoni|Direttiva|Deċiżjoni ta' Implimentazzjoni|Deċiżjoni)\s+\(UE\)\s+(?:Nru\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:tal-Parlament Ewropew u tal-Kunsill|tal-Kummissjoni|tal-Kunsill))?"),
            ("nl", r"(?i)^(?:Uitvoeringsverordening|Gedelegeerde verordening|Verordening|Uitvoeringsrichtlijn|Richtlijn|Uitvoeringsbesluit|Besluit)\s+\(EU\)\s+(?:nr\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:van het Europees Parlement en de Raad|van de Commissie|van de Raad))?"),
            ("pl", r"(?i)^(?:Rozporządzenie wykonawcze|Rozporządzenie delegowane|Rozporządzenie|Dyrektywa wykonawcza|Dyrektywa|Decyzja wykonawcza|Decyzja)(?P<institution>\s+(?:Parlamentu Europejskiego i Rady|Komisji|Rady))?\s+\(UE\)\s+(?:nr\s+)?\d{4}/\d{1,5}"),
            ("pt", r"(?i)^(?:Regulamento de Execução|Regulamento Delegado|Regulamento|Diretiva de Execução|Diretiva Delegada|Diretiva|Decisão de Execução|Decisão Delegada|Decisão)\s+\(UE\)\s+(?:n\.?º\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:do Parlamento Europeu e do Conselho|da Comissão|do Conselho))?"),
            ("ro", r"(?i)^(?:Regulamentul de punere în aplicare|Regulamentul delegat|Regulamentul|Directiva de punere în aplicare|Directiva|Decizia de punere în aplicare|Decizia)\s+\(UE\)\s+(?:nr\.\s+)?\d{4}/\d{1,5}(?P<institution>\s+(?:al Parlamentului European și al Consiliului|al Comisiei|al Consiliului))?"),
            ("sk", r"(?i)^(?:Vykonávacie nariadenie|Delegované nariadenie|Nariadenie|Vykonávacia smernica|Smernica|Vykonávacie rozhodnutie|Rozhodnutie)(?P<institution>\s+(?:Európskeho parlamentu a Rady|Komisie|Rady))?\s+\(EÚ\)\s+(?:č\.\s+)?\d{4}/\d{1,5}"),
            ("sl", r"(?i)^(?:Izvedbena uredba|Delegirana uredba|Uredba|Izvedbena direktiva|Delegirana direktiva|Direktiva|Izvedbeni sklep|Delegirani sklep|Sklep)(?P<institution>\s+(?:Evropskega parlamenta in Sveta|Komisije|Sveta))?\s+\(EU\)\s+(?:št\.\s+)?\d{4}/\d{1,5}"),
            ("fi", r"(?i)^(?P<institution>(?:Euroopan parlamentin ja neuvoston|Komission|Neuvoston)\s+)?(?:täytäntöönpanoasetus|delegoitu asetus|asetus|täytäntöönpanodirektiivi|direktiivi|täytäntöönpanopäätös|päätös)\s+\(EU\)\s+(?:N:o\s+)?\d{4}/\d{1,5}"),
            ("sv", r"(?i)^(?P<institution>(?:Europaparlamentets och rådets|Kommissionens|Rådets)\s+)?(?:genomförandeförordning|delegerade förordning|delegerad förordning|förordning|genomförandedirektiv|direktiv|genomförandebeslut|beslut)\s+\(EU\)\s+(?:nr\s+)?\d{4}/\d{1,5}"),
        ];

        table
            .iter()
            .map(|(language, pattern)| (*language, Regex::new(pattern).unwrap()))
            .collect()
    };
}

/// Language-specific abbreviations of "European Union" as they appear in
/// the localized identifier, e.g. "(ЕС) 2023/138" in Bulgarian.
/// Languages that keep the plain "EU" token are absent.
pub const EU_ABBREVIATIONS: &[(&str, &str)] = &[
    ("bg", "ЕС"),
    ("el", "ΕΕ"),
    ("es", "UE"),
    ("et", "EL"),
    ("fr", "UE"),
    ("ga", "AE"),
    ("it", "UE"),
    ("lt", "ES"),
    ("lv", "ES"),
    ("mt", "UE"),
    ("pl", "UE"),
    ("pt", "UE"),
    ("ro", "UE"),
    ("sk", "EÚ"),
];

/// Languages whose short names keep a lowercase initial; everywhere else
/// the initial is uppercased.
pub const LOWERCASE_INITIAL_LANGUAGES: &[&str] =
    &["cs", "da", "el", "et", "fi", "fr", "hu", "it", "pl", "sk", "sv"];

pub fn eu_abbreviation(language: &str) -> Option<&'static str> {
    let language = language.to_lowercase();
    EU_ABBREVIATIONS
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, abbreviation)| *abbreviation)
}
