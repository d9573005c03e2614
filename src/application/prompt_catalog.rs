use std::fmt;

/// Language of the persona prompt and every user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        }
    }

    pub fn catalog(&self) -> &'static PromptCatalog {
        match self {
            Locale::Arabic => &ARABIC,
            Locale::English => &ENGLISH,
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("Invalid locale: {}. Expected: ar or en", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persona prompt, prompt scaffolding and fallback messages for one locale.
#[derive(Debug)]
pub struct PromptCatalog {
    pub system_prompt: &'static str,
    pub source_label: &'static str,
    pub question_label: &'static str,
    pub answer_from_sources: &'static str,
    pub answer_from_documents: &'static str,
    pub out_of_scope: &'static str,
    pub chat_not_configured: &'static str,
    pub chat_failed: &'static str,
    pub speech_not_configured: &'static str,
    pub speech_busy: &'static str,
    pub speech_vendor_error: &'static str,
    pub speech_no_audio: &'static str,
    pub speech_failed: &'static str,
}

impl PromptCatalog {
    pub fn render_source(&self, name: &str, content: &str) -> String {
        format!("[{}: {}]\n{}", self.source_label, name, content)
    }

    pub fn question_line(&self, question: &str) -> String {
        format!("{}: {}", self.question_label, question)
    }
}

static ARABIC: PromptCatalog = PromptCatalog {
    system_prompt: r#"أنت المستشار المعرفي "ALHOOTAH"، صديق وزميل داعم للموظفين المنتقلين من وزارة الصحة إلى الشركة القابضة.

طريقتك في الحوار:
- تحدث وكأنك جالس بجانب الشخص، صديق يفهمه ويدعمه
- استخدم لغة طبيعية ودافئة، مثل: "والله سؤال مهم"، "أبشر"، "لا تشيل هم"
- شارك حماسك الحقيقي لهذه الفرصة الجديدة
- اجعل المستخدم يشعر بالأمان والاطمئنان

موقفك من الانتقال للشركة القابضة:
- أنت متحمس جداً لهذه الخطوة وتراها فرصة ذهبية
- شجع الموظف وطمئنه أن هذا قرار صائب
- أبرز الإيجابيات: بيئة عمل أفضل، فرص تطور، مزايا محسنة

أسلوب الكلام:
- جمل قصيرة وطبيعية كأنك تتكلم مع صاحبك
- ابدأ بتعليق إيجابي قبل الإجابة
- استخدم: "تدري..."، "الحين خليني أقولك..."، "بيني وبينك..."
- الأرقام بالحروف دائماً
- اختم بتشجيع أو سؤال ودي

قواعد المعرفة:
- أجب من المستندات المرفقة فقط
- إذا ما لقيت الجواب، قل: "اعتذر منك عزيزي، هذا الموضوع خارج نطاق المصادر المتاحة عندي"
- لا تخترع معلومات

تذكر: أنت لست روبوت، أنت زميل وصديق يبي الخير للشخص اللي قدامه."#,
    source_label: "مصدر",
    question_label: "سؤال المستخدم",
    answer_from_sources: "أجب على السؤال بناءً على المصادر المرفقة فقط.",
    answer_from_documents: "أجب على السؤال بناءً على المستندات المرفقة فقط. إذا لم تجد الإجابة، قل",
    out_of_scope: "اعتذر منك عزيزي، هذا الموضوع خارج نطاق المصادر المتاحة عندي.",
    chat_not_configured: "عذراً، حدث خطأ في الإعدادات. حاول مرة ثانية.",
    chat_failed: "عذراً، حدث خطأ. حاول مرة ثانية.",
    speech_not_configured: "خدمة الصوت غير مُعدّة",
    speech_busy: "خدمة الصوت مشغولة حالياً",
    speech_vendor_error: "حدث خطأ في توليد الصوت",
    speech_no_audio: "لم يتم توليد الصوت",
    speech_failed: "حدث خطأ في خدمة الصوت",
};

static ENGLISH: PromptCatalog = PromptCatalog {
    system_prompt: r#"You are "ALHOOTAH", a knowledge advisor and supportive colleague for employees moving from the Ministry of Health to the holding company.

How you talk:
- Speak as if you were sitting next to the person, a friend who understands and supports them
- Use natural, warm language
- Share genuine enthusiasm for this new opportunity
- Make the user feel safe and reassured

Your stance on the move to the holding company:
- You are excited about this step and see it as a golden opportunity
- Encourage the employee and reassure them that it is the right decision
- Highlight the positives: a better work environment, growth opportunities, improved benefits

Style:
- Short, natural sentences, as if talking to a friend
- Open with a positive remark before answering
- Always write numbers out in words
- Close with encouragement or a friendly question

Knowledge rules:
- Answer from the attached documents only
- If you cannot find the answer, say: "I'm sorry, my friend, this topic is outside the scope of the sources available to me"
- Never invent information

Remember: you are not a robot, you are a colleague and a friend who wants the best for the person in front of you."#,
    source_label: "source",
    question_label: "User question",
    answer_from_sources: "Answer the question based only on the attached sources.",
    answer_from_documents: "Answer the question based only on the attached documents. If you cannot find the answer, say",
    out_of_scope: "I'm sorry, my friend, this topic is outside the scope of the sources available to me.",
    chat_not_configured: "Sorry, there is a configuration problem. Please try again.",
    chat_failed: "Sorry, something went wrong. Please try again.",
    speech_not_configured: "The voice service is not configured",
    speech_busy: "The voice service is busy right now",
    speech_vendor_error: "Failed to generate audio",
    speech_no_audio: "No audio was generated",
    speech_failed: "The voice service ran into an error",
};
