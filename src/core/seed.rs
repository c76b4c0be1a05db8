use super::models::{
    CardSet,
    ExamplePair,
    WordEntry,
};

/// The card set shown on first launch, before anything is generated.
pub fn initial_sets() -> Vec<CardSet> {
    vec![CardSet::new(vec![
        WordEntry {
            word: "Dominate".to_string(),
            phonetic: "/ˈdɒmɪneɪt/".to_string(),
            translation: "支配".to_string(),
            definition: "对某人或某事拥有**控制**或指挥权；在某方面占主导地位。".to_string(),
            mnemonic: "想象 \"Dominoes\" (多米诺骨牌)。当你推倒第一块时，你就**支配** (Control) 了所有其他骨牌的命运。"
                .to_string(),
            examples: vec![ExamplePair {
                source: "The company hopes to **dominate** the software market.".to_string(),
                target: "该公司希望**主导**软件市场。".to_string(),
            }],
        },
        WordEntry {
            word: "Nominate".to_string(),
            phonetic: "/ˈnɒmɪneɪt/".to_string(),
            translation: "提名".to_string(),
            definition: "正式建议某人作为职位的候选人或获得荣誉/**奖项**。".to_string(),
            mnemonic: "想象 \"Name\" (名字)。当你**提名** (Nominate) 某人时，你就是把他们的名字提出来。"
                .to_string(),
            examples: vec![ExamplePair {
                source: "I would like to **nominate** Sarah for the position.".to_string(),
                target: "我想**提名**莎拉担任这个职位。".to_string(),
            }],
        },
        WordEntry {
            word: "Intimidate".to_string(),
            phonetic: "/ɪnˈtɪmɪdeɪt/".to_string(),
            translation: "恐吓".to_string(),
            definition: "威吓某人，通常是为了强迫他们做某事，使人感到**胆怯**。".to_string(),
            mnemonic: "词根中有 \"Timid\" (胆小的)。如果有人**恐吓** (Intimidate) 你，他们就是想让你内心感到胆小 (Timid)。"
                .to_string(),
            examples: vec![ExamplePair {
                source: "They tried to **intimidate** the witness into silence.".to_string(),
                target: "他们试图**恐吓**证人保持沉默。".to_string(),
            }],
        },
    ])]
}
