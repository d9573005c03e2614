mod gemini_chat_client_test;
