// src/core/dictionary/data.rs
//! Hand-curated word tables. Values are the pre-authored Latin renderings.

/// Book and novel titles and fixed phrases. Keys may contain spaces.
pub(super) const TITLES: &[(&str, &str)] = &[
    ("نمل", "namal"),
    ("پیر کامل", "peer-e-kamil"),
    ("قرآنِ کامل", "quran-e-kamil"),
    ("مشاف", "mushaf"), ("مصحف", "mushaf"), ("خالق", "khaliq"),
    ("دجال", "dajjal"),
    ("جنت کے پتے", "jannat-ke-pattay"),
    ("جو بچیں ہیں سنگ سمیٹ لو", "jo-bachay-hain-sang-samet-lo"),
    ("خدا اور محبت", "khuda-aur-mohabbat"),
    ("راجہ گدھ", "raja-gidh"),
    ("آنگن", "aangan"),
    ("آگ کا دریا", "aag-ka-darya"),
    ("اداس نسلیں", "udaas-naslein"),
    ("خدا کی بستی", "khuda-ki-basti"),
    ("من چلے کا سودا", "man-chalay-ka-sauda"),
    ("امراؤ جان ادا", "umrao-jan-ada"),
    ("ہم سفر", "hum-safar"),
    ("شہاب نامہ", "shahab-nama"),
    ("بستی", "basti"),
];

/// Everyday words, pronouns and particles.
pub(super) const COMMON_WORDS: &[(&str, &str)] = &[
    ("ایک", "ek"), ("رہے", "rahe"), ("تھے", "thay"),
    ("کہیں", "kaheen"), ("سائیکل", "cycle"), ("تجھے", "tujhe"),
    ("مجھے", "mujhe"), ("سانحہ", "saaneha"), ("خطا", "khata"),
    ("کھایا", "khaya"),
    ("رہے گا", "rahega"),
    ("ذرا", "zara"), ("آہستہ", "aahista"), ("چل", "chal"),
    ("چلنا", "chalna"), ("اپنی", "apni"), ("میری", "meri"),
    ("تمہاری", "tumhari"), ("ہماری", "humari"), ("دونوں", "dono"),
    ("ہو", "ho"), ("ہیں", "hain"), ("کتنا", "kitna"),
    ("مشکل", "mushkil"), ("آسان", "aasan"), ("اذیت", "aziyyat"),
    ("مہندی", "mehndi"), ("بیٹھے", "baithe"), ("کھڑے", "khade"),
    ("اٹھے", "uthe"), ("اس", "is"), ("اُس", "us"),
    ("تکبر", "takabbur"), ("غرور", "guroor"), ("گھمنڈ", "ghamand"),
    ("سرد", "sard"), ("گرم", "garm"), ("نیند", "neend"),
    ("آوارگی", "awaargi"), ("دوسروں", "dusron"), ("سننے", "sunne"),
    ("سننا", "sunna"), ("ہی", "hi"), ("کے", "ke"),
    ("چائے", "chaay"), ("میں", "main"), ("ورلڈ", "world"),
    ("کپ", "cup"), ("چھوٹی", "choti"), ("گھر", "ghar"),
    ("لڑکیاں", "larkiyan"), ("لڑکیوں", "larkiyon"), ("تھا", "tha"),
    ("سوچ", "soch"), ("نکلا", "nikla"), ("نکلنا", "nikalna"),
    ("نکلتا", "nikalta"), ("چاند", "chaand"), ("مر", "mar"),
    ("مرنا", "marna"), ("مارنا", "maarna"), ("دیار", "dayar"),
    ("شوق", "shoq"), ("منظر", "manzar"), ("منظروں", "manzaron"),
    ("اونچا", "ooncha"), ("نیچا", "nicha"), ("گی", "gi"),
    ("بیوی", "biwi"), ("شوہر", "shohar"), ("بحث", "bahes"),
    ("نانی", "nani"), ("دادی", "dadi"), ("چاچی", "chachi"),
    ("مامی", "mami"), ("پھوپھی", "phoophi"), ("رانی", "rani"),
    ("فنکشن", "function"), ("سمجھانا", "samjhana"), ("سمجھانے", "samjhane"),
    ("سمجھاتے", "samjhate"), ("امی", "ammi"), ("ابو", "abbu"),
    ("بھائی", "bhai"), ("بہن", "bahen"), ("جاگنا", "jaagna"),
    ("جگانا", "jagaana"), ("چلانا", "chalana"), ("چلا", "chala"),
    ("رات", "raat"), ("دن", "din"), ("راتیں", "raatein"),
    ("راتوں", "raaton"), ("ہوں", "hon"), ("بسر", "basar"),
    ("یوں", "yun"), ("گزر", "guzar"), ("گزار", "guzaar"),
    ("گزارنا", "guzaarna"), ("گزرنا", "guzarna"), ("تیرے", "tere"),
    ("میرے", "mere"), ("رکھا", "rakha"), ("رکھنا", "rakhna"),
    ("کوئی", "koi"), ("سوئی", "soi"), ("روئی", "roi"),
    ("کھوئی", "khoi"), ("خود", "khud"), ("چراغ", "chiraag"),
    ("فکر", "fikr"), ("یقین", "yaqeen"), ("یقیناً", "yaqeenan"),
    ("بجھا", "bujha"), ("بوجھ", "bojh"), ("بوجھا", "bojha"),
    ("سوتے", "sote"), ("روتے", "rote"), ("موٹے", "mote"),
    ("شمع", "shama"), ("نصیب", "naseeb"), ("بھولا", "bhula"),
    ("بھلانا", "bhulana"), ("بھولنا", "bhoolna"), ("لازم", "laazim"),
    ("حیات", "hayat"), ("موت", "maut"), ("کو", "ko"),
    ("کریں", "karen"), ("سہن", "sahen"), ("شربت", "sharbat"),
    ("ہلا", "hila"), ("ہلانا", "hilana"), ("استعمال", "istemal"),
    ("نبی", "nabi"), ("دوسرے", "dusre"), ("ہجوم", "hojoom"),
    ("ضد", "zid"), ("آنکھوں", "aankhon"), ("آنکھیں", "aankhen"),
    ("دنیا", "dunya"), ("لیجیے", "lijiye"), ("ڈھونڈ", "dhoond"),
    ("چھوڑنی", "chorni"), ("تیری", "teri"), ("بھی", "bhi"),
    ("سے", "se"), ("پر", "par"), ("کبھی", "kabhi"),
    ("ہمیشہ", "hamesha"), ("بغیر", "baghair"), ("شاید", "shayad"),
    ("لاکھ", "laakh"), ("ہزار", "hazaar"), ("پل", "pal"),
    ("لمحہ", "lamha"), ("وقت", "waqt"), ("خواب", "khwaab"),
    ("خاموشی", "khamoshi"), ("آواز", "awaaz"), ("صدا", "sada"),
    ("یادیں", "yaadein"), ("باتیں", "baatein"), ("تنہا", "tanha"),
    ("تنہائی", "tanhai"), ("محفل", "mehfil"), ("راہ", "raah"),
];

/// Four-letter root words.
pub(super) const FOUR_LETTER: &[(&str, &str)] = &[
    ("محبت", "mohabbat"), ("نفرت", "nafrat"), ("زندگی", "zindagi"),
    ("خاموش", "khamosh"), ("انداز", "andaaz"), ("دوستی", "dosti"),
    ("یقین", "yaqeen"), ("امید", "umeed"), ("خواہش", "khwahish"),
    ("عبادت", "ibadat"), ("عدالت", "adalat"), ("مسجد", "masjid"),
    ("جنت", "jannat"), ("جہنم", "jahannum"), ("نماز", "namaz"),
    ("روشن", "roshan"), ("اندھیرا", "andhera"), ("چہرہ", "chehra"),
    ("خیال", "khayal"), ("احساس", "ehsaas"), ("سکون", "sukoon"),
    ("پیار", "pyaar"), ("کہانی", "kahani"), ("قسمت", "qismat"),
    ("رحمت", "rehmat"), ("ہدایت", "hidayat"),
];

/// Three-letter root words.
pub(super) const THREE_LETTER: &[(&str, &str)] = &[
    ("سنگ", "sang"), ("پیر", "peer"), ("دل", "dil"),
    ("غم", "gham"), ("درد", "dard"), ("راہ", "rah"),
    ("بات", "baat"), ("نور", "noor"), ("وقت", "waqt"),
    ("راز", "raaz"), ("خوف", "khauf"), ("حق", "haq"),
    ("علم", "ilm"), ("نظر", "nazar"), ("سفر", "safar"),
    ("زخم", "zakhm"), ("صبح", "subah"), ("شام", "shaam"),
    ("رات", "raat"), ("دن", "din"), ("یاد", "yaad"),
    ("حال", "haal"), ("نام", "naam"), ("کام", "kaam"),
    ("چاہ", "chah"), ("اور", "aur"), ("پر", "par"),
    ("سے", "se"), ("تک", "tak"), ("بعد", "baad"),
];
