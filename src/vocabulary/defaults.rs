//! Built-in vocabulary shipped with the app

use super::models::{Category, LearningItem};

const DEFAULT_TERMS: &[(&str, &str, &str, Category)] = &[
    ("rs-1", "Segnale di pericolo", "危险警告标志", Category::RoadSigns),
    ("rs-2", "Segnale di divieto", "禁令标志", Category::RoadSigns),
    ("rs-3", "Segnale di obbligo", "指示标志", Category::RoadSigns),
    ("rs-4", "Dare precedenza", "让行", Category::RoadSigns),
    ("rs-5", "Senso unico", "单行道", Category::RoadSigns),
    ("rs-6", "Divieto di sosta", "禁止停车", Category::RoadSigns),
    ("ru-1", "Precedenza", "优先权", Category::Rules),
    ("ru-2", "Limite di velocità", "限速", Category::Rules),
    ("ru-3", "Sorpasso", "超车", Category::Rules),
    ("ru-4", "Incrocio", "交叉路口", Category::Rules),
    ("ru-5", "Carreggiata", "车行道", Category::Rules),
    ("ve-1", "Freno", "刹车", Category::Vehicle),
    ("ve-2", "Pneumatico", "轮胎", Category::Vehicle),
    ("ve-3", "Frizione", "离合器", Category::Vehicle),
    ("ve-4", "Specchietto retrovisore", "后视镜", Category::Vehicle),
    ("ve-5", "Fari abbaglianti", "远光灯", Category::Vehicle),
    ("be-1", "Distanza di sicurezza", "安全距离", Category::Behavior),
    ("be-2", "Rallentare", "减速", Category::Behavior),
    ("be-3", "Fermarsi", "停车", Category::Behavior),
    ("be-4", "Svoltare a destra", "右转", Category::Behavior),
    ("sa-1", "Cintura di sicurezza", "安全带", Category::Safety),
    ("sa-2", "Casco", "头盔", Category::Safety),
    ("sa-3", "Airbag", "安全气囊", Category::Safety),
    ("sa-4", "Seggiolino per bambini", "儿童座椅", Category::Safety),
    ("ac-1", "Incidente stradale", "交通事故", Category::Accidents),
    ("ac-2", "Triangolo", "三角警告牌", Category::Accidents),
    ("ac-3", "Primo soccorso", "急救", Category::Accidents),
    ("ac-4", "Constatazione amichevole", "事故协议书", Category::Accidents),
    ("do-1", "Patente di guida", "驾驶执照", Category::Documents),
    ("do-2", "Libretto di circolazione", "行驶证", Category::Documents),
    ("do-3", "Assicurazione", "保险", Category::Documents),
    ("do-4", "Revisione", "年检", Category::Documents),
    ("ge-1", "Strada", "道路", Category::General),
    ("ge-2", "Veicolo", "车辆", Category::General),
    ("ge-3", "Pedone", "行人", Category::General),
    ("ge-4", "Conducente", "驾驶员", Category::General),
    ("ge-5", "Autostrada", "高速公路", Category::General),
];

/// The built-in item set, every item brand new
pub fn default_vocabulary() -> Vec<LearningItem> {
    DEFAULT_TERMS
        .iter()
        .map(|&(id, prompt, answer, category)| LearningItem::new(id, prompt, answer, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_ids_unique() {
        let items = default_vocabulary();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_defaults_cover_every_category() {
        let items = default_vocabulary();
        for category in Category::ALL {
            assert!(
                items.iter().filter(|i| i.category == category).count() >= 3,
                "too few items in {category}"
            );
        }
    }

    #[test]
    fn test_defaults_are_unseen() {
        assert!(default_vocabulary()
            .iter()
            .all(|i| i.repetition == 0 && i.interval == 0 && i.next_review_date == 0));
    }
}
